//! Structured failure payload
//!
//! [`Fault`] is the failure payload produced by the built-in primitives and
//! by the structured traversals. Its serialized form mirrors the shape of the
//! deviated input:
//!
//! - a leaf check fails with a token: `"not_string"`
//! - an object shape fails with the failing keys only: `{"age": "min"}`
//! - an array fails positionally, `null` where an element succeeded:
//!   `[null, "not_number"]`
//!
//! Caller-defined error types interoperate by implementing `From<Fault>`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Well-known failure tokens emitted by the built-in primitives.
pub mod codes {
    /// No alternative of an `or` matched.
    pub const NO_MATCH: &str = "no_match";
    /// Value is not one of the allowed options.
    pub const NOT_OPTION: &str = "not_option";

    pub const NOT_STRING: &str = "not_string";
    pub const NOT_NUMBER: &str = "not_number";
    pub const NOT_BOOLEAN: &str = "not_boolean";
    pub const NOT_NULL: &str = "not_null";
    pub const NOT_OBJECT: &str = "not_object";
    pub const NOT_ARRAY: &str = "not_array";

    pub const UNDEFINED: &str = "undefined";
    pub const NOT_UNDEFINED: &str = "not_undefined";

    pub const EMPTY: &str = "empty";
    pub const NOT_A_NUMBER: &str = "not_a_number";
    pub const NOT_EMAIL: &str = "not_email";
    pub const NOT_GUID: &str = "not_guid";
    pub const NO_REGEX_MATCH: &str = "no_regex_match";

    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const GREATER: &str = "greater";
    pub const LESS: &str = "less";
    pub const INTEGER: &str = "integer";
    pub const POSITIVE: &str = "positive";
    pub const NEGATIVE: &str = "negative";

    pub const MIN_SIZE: &str = "min_size";
    pub const MAX_SIZE: &str = "max_size";
    pub const SIZE: &str = "size";
}

// ============================================================================
// FAULT
// ============================================================================

/// Failure payload of the built-in deviations.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_deviator::foundation::Fault;
///
/// let leaf = Fault::code("empty");
/// assert_eq!(leaf.as_code(), Some("empty"));
///
/// let nested = Fault::Fields([("name".to_string(), leaf)].into_iter().collect());
/// assert_eq!(serde_json::to_string(&nested).unwrap(), r#"{"name":"empty"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Fault {
    /// A single failure token from a leaf check.
    #[error("{0}")]
    Code(Cow<'static, str>),

    /// Object shape failure, keyed by the failing properties only.
    #[error("{} field(s) failed: {}", .0.len(), join_keys(.0))]
    Fields(IndexMap<String, Fault>),

    /// Array failure, one slot per input element; `None` where it succeeded.
    #[error("{} of {} element(s) failed", .0.iter().flatten().count(), .0.len())]
    Elements(Vec<Option<Fault>>),
}

fn join_keys(fields: &IndexMap<String, Fault>) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl Fault {
    /// Creates a leaf failure token.
    pub fn code(code: impl Into<Cow<'static, str>>) -> Self {
        Self::Code(code.into())
    }

    /// The token returned by `or` when every alternative failed.
    #[must_use]
    pub const fn no_match() -> Self {
        Self::Code(Cow::Borrowed(codes::NO_MATCH))
    }

    /// Returns the token of a leaf failure.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            _ => None,
        }
    }

    /// Returns `true` for the `or` "nothing matched" token.
    pub fn is_no_match(&self) -> bool {
        self.as_code() == Some(codes::NO_MATCH)
    }

    /// Returns the per-field failures of an object shape failure.
    pub const fn fields(&self) -> Option<&IndexMap<String, Fault>> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the positional failures of an array failure.
    pub fn elements(&self) -> Option<&[Option<Fault>]> {
        match self {
            Self::Elements(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Looks up a nested failure by key or index path segment.
    ///
    /// Numeric segments index into element failures, other segments into
    /// field failures.
    pub fn get(&self, segment: &str) -> Option<&Fault> {
        match self {
            Self::Code(_) => None,
            Self::Fields(fields) => fields.get(segment),
            Self::Elements(elements) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| elements.get(index))
                .and_then(Option::as_ref),
        }
    }
}

impl From<&'static str> for Fault {
    fn from(code: &'static str) -> Self {
        Self::Code(Cow::Borrowed(code))
    }
}

impl From<String> for Fault {
    fn from(code: String) -> Self {
        Self::Code(Cow::Owned(code))
    }
}

impl PartialEq<&str> for Fault {
    fn eq(&self, other: &&str) -> bool {
        self.as_code() == Some(*other)
    }
}

// ============================================================================
// TESTS
// ============================================================================
