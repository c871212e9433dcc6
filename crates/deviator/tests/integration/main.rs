//! Integration tests for nebula-deviator.
//!
//! - `composer` - sequencing, short-circuit, alternation, identity
//! - `traversal` - object shape and array each aggregation
//! - `catalog` - end-to-end pipelines built from the built-in primitives

mod catalog;
mod composer;
mod traversal;
