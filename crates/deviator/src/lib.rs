//! # nebula-deviator
//!
//! Composable value deviation pipelines: chain small checks and transforms
//! into one function that turns an input into a transformed value, an early
//! exit value, or a structured failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let amount = deviate::<String>()
//!     .replace(",", ".")
//!     .trim()
//!     .not_empty()
//!     .to_number();
//!
//! assert_eq!(amount.deviate("  12,5  ".into()), next(12.5));
//! assert_eq!(amount.deviate("   ".into()), failed(Fault::code("empty")));
//! ```
//!
//! ## Outcomes
//!
//! Every step returns an [`Outcome`](foundation::Outcome):
//!
//! - `Continue(value)` feeds the next step
//! - `Done(value)` ends the pipeline successfully
//! - `Failed(error)` ends the pipeline with an error payload
//!
//! ## Structured input
//!
//! Object and array inputs are traversed with
//! [`shape`](foundation::Deviator::shape) and
//! [`each`](foundation::Deviator::each). Failures are collected per key or
//! per index into a [`Fault`](foundation::Fault) that mirrors the input:
//!
//! ```rust,ignore
//! let tags = deviate::<Value>().as_array().each(deviate::<Value>().is_string());
//! let outcome = tags.deviate(json!(["a", 1]));
//! assert_eq!(serde_json::to_value(outcome.error().unwrap())?, json!([null, "not_string"]));
//! ```
//!
//! ## Built-in primitives
//!
//! - **Value**: `is_string`, `is_number`, `as_string`, `as_number`, `nullable`, ...
//! - **Option**: `optional`, `defined`, `undefined`
//! - **String**: `trim`, `lowercase`, `not_empty`, `replace`, `to_number`,
//!   `email`, `guid`, `matches`
//! - **Number**: `min`, `max`, `greater`, `less`, `integer`, `round`
//! - **Collection**: `min_size`, `max_size`, `size`, `each`, `each_of`, `shape`

// Combinator nesting (Then<Then<MapNext<...>, ...>, ...>) produces complex
// types that are inherent to the builder architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
