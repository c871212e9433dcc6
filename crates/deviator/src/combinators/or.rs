//! OR combinator - first-match-wins alternation
//!
//! [`Or`] tries an ordered list of alternatives against a clone of its input.
//! The first alternative that succeeds wins and no later alternative runs.
//! When every alternative fails the individual errors are discarded and the
//! combinator fails with the [`codes::NO_MATCH`] token.
//!
//! A winning `Done` is normalized to `Continue`, so the pipeline resumes
//! after the alternation.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let scalar = deviate::<Value>().or([
//!     deviate::<Value>().is_string().boxed(),
//!     deviate::<Value>().is_number().boxed(),
//! ]);
//! assert!(scalar.deviate(json!(1)).is_continue());
//! assert!(scalar.deviate(json!(true)).is_failed());
//! ```

use crate::foundation::{Deviation, Fault, Outcome, codes};
use std::fmt;
use std::marker::PhantomData;

/// Ordered alternation over deviations of one type.
///
/// # Type Parameters
///
/// * `A` - The alternative type; use boxed deviations to mix kinds
/// * `O` - The early-exit payload of the surrounding pipeline
/// * `E` - The failure payload of the surrounding pipeline
pub struct Or<A, O, E> {
    alternatives: Vec<A>,
    _marker: PhantomData<fn() -> (O, E)>,
}

impl<A, O, E> Or<A, O, E> {
    /// Creates a new `Or` combinator from alternatives in priority order.
    pub fn new(alternatives: impl IntoIterator<Item = A>) -> Self {
        Self {
            alternatives: alternatives.into_iter().collect(),
            _marker: PhantomData,
        }
    }

    /// Returns the alternatives in priority order.
    pub fn alternatives(&self) -> &[A] {
        &self.alternatives
    }
}

impl<A: Clone, O, E> Clone for Or<A, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.alternatives.clone())
    }
}

impl<A: fmt::Debug, O, E> fmt::Debug for Or<A, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("alternatives", &self.alternatives)
            .finish()
    }
}

impl<A, O, E> Deviation for Or<A, O, E>
where
    A: Deviation,
    A::Input: Clone,
    A::Done: Into<A::Next>,
    E: From<Fault>,
{
    type Input = A::Input;
    type Next = A::Next;
    type Done = O;
    type Error = E;

    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, O, E> {
        for alternative in &self.alternatives {
            match alternative.deviate(input.clone()) {
                Outcome::Continue(value) => return Outcome::Continue(value),
                Outcome::Done(value) => return Outcome::Continue(value.into()),
                Outcome::Failed(_) => {}
            }
        }
        Outcome::Failed(E::from(Fault::code(codes::NO_MATCH)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
