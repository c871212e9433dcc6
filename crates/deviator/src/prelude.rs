//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_deviator::prelude::*;` import that brings
//! in the builder, the outcome constructors, the failure type and the JSON
//! value types pipelines usually run on.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let name = deviate::<Option<Value>>().defined().as_string().trim().not_empty();
//! let user = deviate::<Value>().as_object().shape(Shape::new().field("name", name));
//! ```

// ============================================================================
// FOUNDATION: Outcome, traits, errors, builder
// ============================================================================

pub use crate::foundation::{
    BoxDeviation, Deviation, Deviator, Fault, Identity, Outcome, OutcomeKind, Stage, codes,
    deviate, deviation_fn, done, failed, next,
};

// ============================================================================
// COMBINATORS: Structured traversal
// ============================================================================

pub use crate::combinators::{Elements, Shape};

// ============================================================================
// VALUES: Dynamic input domain
// ============================================================================

pub use serde_json::{Map, Value, json};
