//! Three-way outcome of a single deviation step
//!
//! Every step in a pipeline produces an [`Outcome`]:
//!
//! - [`Outcome::Continue`] - success, the value feeds the next step
//! - [`Outcome::Done`] - success, the pipeline stops and the value is final
//! - [`Outcome::Failed`] - failure, the pipeline stops with an error payload
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::foundation::{Outcome, done, failed, next};
//!
//! let ok: Outcome<i32, (), &str> = next(1);
//! assert!(ok.is_success());
//!
//! let stopped: Outcome<i32, (), &str> = done(());
//! assert!(stopped.is_success());
//!
//! let bad: Outcome<i32, (), &str> = failed("nope");
//! assert!(bad.is_failure());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of invoking a deviation.
///
/// # Type Parameters
///
/// * `N` - The continue payload, fed into the next step
/// * `O` - The early-exit payload, returned to the caller as-is
/// * `E` - The failure payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
#[must_use = "an outcome may be a failure that should be inspected"]
pub enum Outcome<N, O, E> {
    /// Success; the value is passed to the next composed step.
    Continue(N),
    /// Success; no further step runs and the value is the final output.
    Done(O),
    /// Failure; no further step runs and the value is the error payload.
    Failed(E),
}

/// Discriminant of an [`Outcome`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// See [`Outcome::Continue`].
    Continue,
    /// See [`Outcome::Done`].
    Done,
    /// See [`Outcome::Failed`].
    Failed,
}

impl OutcomeKind {
    /// Returns the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::Done => "Done",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Creates an [`Outcome::Continue`].
#[inline]
pub fn next<N, O, E>(value: N) -> Outcome<N, O, E> {
    Outcome::Continue(value)
}

/// Creates an [`Outcome::Done`].
#[inline]
pub fn done<N, O, E>(value: O) -> Outcome<N, O, E> {
    Outcome::Done(value)
}

/// Creates an [`Outcome::Failed`].
#[inline]
pub fn failed<N, O, E>(error: E) -> Outcome<N, O, E> {
    Outcome::Failed(error)
}

// ============================================================================
// INSPECTION
// ============================================================================

impl<N, O, E> Outcome<N, O, E> {
    /// Returns the discriminant.
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Continue(_) => OutcomeKind::Continue,
            Self::Done(_) => OutcomeKind::Done,
            Self::Failed(_) => OutcomeKind::Failed,
        }
    }

    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// `Continue` and `Done` are both successes.
    pub const fn is_success(&self) -> bool {
        !self.is_failed()
    }

    pub const fn is_failure(&self) -> bool {
        self.is_failed()
    }

    /// Returns the continue payload, if any.
    pub const fn next_value(&self) -> Option<&N> {
        match self {
            Self::Continue(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the early-exit payload, if any.
    pub const fn done_value(&self) -> Option<&O> {
        match self {
            Self::Done(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure payload, if any.
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the failure payload, if any.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// TRANSFORMATION
// ============================================================================

impl<N, O, E> Outcome<N, O, E> {
    /// Maps the continue payload, leaving the other variants untouched.
    pub fn map_next<N2>(self, f: impl FnOnce(N) -> N2) -> Outcome<N2, O, E> {
        match self {
            Self::Continue(value) => Outcome::Continue(f(value)),
            Self::Done(value) => Outcome::Done(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Maps the early-exit payload, leaving the other variants untouched.
    pub fn map_done<O2>(self, f: impl FnOnce(O) -> O2) -> Outcome<N, O2, E> {
        match self {
            Self::Continue(value) => Outcome::Continue(value),
            Self::Done(value) => Outcome::Done(f(value)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Maps the failure payload, leaving the successes untouched.
    pub fn map_err<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<N, O, E2> {
        match self {
            Self::Continue(value) => Outcome::Continue(value),
            Self::Done(value) => Outcome::Done(value),
            Self::Failed(error) => Outcome::Failed(f(error)),
        }
    }

    /// Collapses `Continue` and `Done` into a single success value.
    pub fn into_result(self) -> Result<N, E>
    where
        O: Into<N>,
    {
        match self {
            Self::Continue(value) => Ok(value),
            Self::Done(value) => Ok(value.into()),
            Self::Failed(error) => Err(error),
        }
    }

    /// Returns the success value, discarding any failure.
    pub fn success(self) -> Option<N>
    where
        O: Into<N>,
    {
        self.into_result().ok()
    }
}

impl<N, O, E> From<Outcome<N, O, E>> for OutcomeKind {
    fn from(outcome: Outcome<N, O, E>) -> Self {
        outcome.kind()
    }
}

// ============================================================================
// TESTS
// ============================================================================
