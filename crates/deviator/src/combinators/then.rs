//! THEN combinator - sequential composition of deviations
//!
//! [`Then`] runs its first deviation and feeds a `Continue` value into the
//! second one. `Done` and `Failed` outcomes end the pipeline unchanged, so the
//! second deviation is never invoked for them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let trimmed_non_empty = deviate::<String>().trim().not_empty();
//! assert!(trimmed_non_empty.deviate("  a ".into()).is_continue());
//! assert!(trimmed_non_empty.deviate("   ".into()).is_failed());
//! ```

use crate::foundation::{Deviation, Outcome};

/// Chains two deviations: `next` receives the continue value of `first`.
///
/// The early-exit and failure payloads of `next` are converted into those of
/// `first`, so a sub-pipeline with narrower payload types can be spliced in.
///
/// # Type Parameters
///
/// * `A` - The deviation that runs first
/// * `B` - The deviation that receives `A`'s continue value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Then<A, B> {
    pub(crate) first: A,
    pub(crate) next: B,
}

impl<A, B> Then<A, B> {
    /// Creates a new `Then` combinator.
    pub const fn new(first: A, next: B) -> Self {
        Self { first, next }
    }
}

impl<A, B> Deviation for Then<A, B>
where
    A: Deviation,
    B: Deviation<Input = A::Next>,
    B::Done: Into<A::Done>,
    B::Error: Into<A::Error>,
{
    type Input = A::Input;
    type Next = B::Next;
    type Done = A::Done;
    type Error = A::Error;

    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, Self::Done, Self::Error> {
        match self.first.deviate(input) {
            Outcome::Continue(value) => match self.next.deviate(value) {
                Outcome::Continue(value) => Outcome::Continue(value),
                Outcome::Done(value) => Outcome::Done(value.into()),
                Outcome::Failed(error) => Outcome::Failed(error.into()),
            },
            Outcome::Done(value) => Outcome::Done(value),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }
}

/// Creates a `Then` combinator from two deviations.
pub const fn then<A, B>(first: A, next: B) -> Then<A, B> {
    Then::new(first, next)
}

// ============================================================================
// TESTS
// ============================================================================
