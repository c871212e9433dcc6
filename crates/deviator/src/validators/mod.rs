//! Built-in primitive catalog
//!
//! Each submodule adds one capability family to
//! [`Deviator`](crate::foundation::Deviator), available only when the
//! pipeline's continue type matches:
//!
//! - [`value`] - type guards and narrowing on `serde_json::Value`
//! - [`option`] - presence checks on `Option<T>`
//! - [`string`] - transforms and checks on `String`
//! - [`number`] - comparisons, sign checks and rounding on `f64`
//! - [`collection`] - size checks and traversal on `Vec<T>` and JSON objects
//! - [`patterns`] - regex-backed string checks (feature `patterns`)
//!
//! Every primitive fails with a [`Fault`] token from
//! [`codes`](crate::foundation::codes), so the pipeline error type must
//! implement `From<Fault>`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let port = deviate::<Value>().as_number().integer().min(1.0).max(65535.0);
//! assert!(port.deviate(json!(8080)).is_continue());
//! assert_eq!(port.deviate(json!(0)), failed(Fault::code("min")));
//! ```

use crate::foundation::{Fault, Outcome};

pub mod collection;
pub mod number;
pub mod option;
#[cfg(feature = "patterns")]
pub mod patterns;
pub mod string;
pub mod value;

pub use string::parse_number;

/// Fails with a well-known token.
pub(crate) fn reject<N, O, E>(code: &'static str) -> Outcome<N, O, E>
where
    E: From<Fault>,
{
    Outcome::Failed(E::from(Fault::from(code)))
}

/// Continues with `value` if `ok`, otherwise fails with `code`.
pub(crate) fn ensure<N, O, E>(value: N, ok: bool, code: &'static str) -> Outcome<N, O, E>
where
    E: From<Fault>,
{
    if ok { Outcome::Continue(value) } else { reject(code) }
}
