//! Core deviation types and traits
//!
//! This module contains the building blocks of the deviation system:
//!
//! - **Outcome**: [`Outcome`], the three-way result of every step
//! - **Traits**: [`Deviation`], plus the closure and identity adapters
//! - **Errors**: [`Fault`] and the well-known failure [`codes`]
//! - **Builder**: [`Deviator`] and the [`deviate`] entry point
//!
//! # Architecture
//!
//! ## 1. Short-circuiting
//!
//! A step that returns `Done` or `Failed` ends the pipeline; only a
//! `Continue` value reaches the following step:
//!
//! ```rust,ignore
//! let pipeline = deviate::<Option<Value>>()
//!     .optional()      // None -> Done(None), nothing below runs
//!     .as_string()
//!     .not_empty();
//! ```
//!
//! ## 2. Typed payloads
//!
//! `Outcome<N, O, E>` carries its continue, early-exit and failure types
//! through every combinator, so the final pipeline type states exactly what
//! a caller has to handle.
//!
//! ## 3. Build once, invoke many times
//!
//! Builder operations consume the pipeline and return a new one. A finished
//! pipeline is immutable and can be shared across threads.

pub mod deviator;
pub mod error;
pub mod outcome;
pub mod traits;

pub use deviator::{Deviator, deviate};
pub(crate) use deviator::guard;
pub use error::{Fault, codes};
pub use outcome::{Outcome, OutcomeKind, done, failed, next};
pub use traits::{BoxDeviation, Deviation, FnDeviation, Identity, Stage, deviation_fn};
