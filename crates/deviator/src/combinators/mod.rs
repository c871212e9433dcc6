//! Combinators for composing deviations
//!
//! Every builder operation on [`Deviator`](crate::foundation::Deviator)
//! produces one of these types. They can also be used directly.
//!
//! # Sequencing
//!
//! - [`Then`] - feeds a continue value into the next deviation
//! - [`Or`] - first-match-wins alternation
//!
//! # Payload mapping
//!
//! - [`MapNext`], [`MapDone`], [`MapErr`]
//!
//! # Structured traversal
//!
//! - [`Each`] - positional traversal of a sequence
//! - [`ShapeDeviation`] - per-key traversal of an object against a [`Shape`]
//!
//! # Observability
//!
//! - [`Traced`] - emits a `tracing` event per invocation

pub mod each;
pub mod map;
pub mod or;
pub mod shape;
pub mod then;
pub mod traced;

pub use each::{Each, Elements};
pub use map::{MapDone, MapErr, MapNext};
pub use or::Or;
pub use shape::{FieldDeviation, Shape, ShapeDeviation};
pub use then::{Then, then};
pub use traced::Traced;
