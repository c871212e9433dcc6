//! EACH combinator - positional traversal of a sequence
//!
//! [`Each`] applies a first deviation and an ordered list of fallback
//! deviations to every element of a `Vec<T>`:
//!
//! - the first alternative that succeeds fills the output slot
//! - when none succeeds the slot is a hole and the error slot holds the
//!   failure of the **first** alternative
//!
//! All elements are visited, so the error sequence reports every failing
//! index, positionally aligned with the input.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let numbers = deviate::<Vec<Value>>().each(deviate::<Value>().is_number());
//! assert_eq!(numbers.deviate(vec![json!(1), json!(2)]), next(vec![json!(1), json!(2)]));
//!
//! let outcome = numbers.deviate(vec![json!(1), json!("x")]);
//! assert_eq!(
//!     serde_json::to_value(outcome.error().unwrap()).unwrap(),
//!     json!([null, "not_number"]),
//! );
//! ```

use crate::foundation::{Deviation, Fault, Outcome};
use std::fmt;
use std::marker::PhantomData;

/// Per-index result of an [`Each`] traversal, before it is collapsed into an
/// outcome.
///
/// Both sequences have the input's length. `values[i]` is `None` exactly when
/// `errors[i]` is `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct Elements<N> {
    pub values: Vec<Option<N>>,
    pub errors: Vec<Option<Fault>>,
}

impl<N> Elements<N> {
    /// Returns `true` if no element failed.
    pub fn is_clean(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Collapses the traversal into `Continue(values)` or
    /// `Failed(Fault::Elements(errors))`.
    pub fn into_outcome<O, E>(self) -> Outcome<Vec<N>, O, E>
    where
        E: From<Fault>,
    {
        if self.is_clean() {
            Outcome::Continue(self.values.into_iter().flatten().collect())
        } else {
            Outcome::Failed(E::from(Fault::Elements(self.errors)))
        }
    }
}

/// Applies element deviations to every element of a sequence.
///
/// # Type Parameters
///
/// * `A` - The element deviation type; all alternatives share it
/// * `O` - The early-exit payload of the surrounding pipeline
/// * `E` - The failure payload of the surrounding pipeline
pub struct Each<A, O, E> {
    first: A,
    rest: Vec<A>,
    _marker: PhantomData<fn() -> (O, E)>,
}

impl<A, O, E> Each<A, O, E> {
    /// Creates an `Each` with a single element deviation.
    pub fn new(element: A) -> Self {
        Self::with_alternatives(element, [])
    }

    /// Creates an `Each` with fallback alternatives tried in order.
    pub fn with_alternatives(first: A, rest: impl IntoIterator<Item = A>) -> Self {
        Self {
            first,
            rest: rest.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

impl<A: Clone, O, E> Clone for Each<A, O, E> {
    fn clone(&self) -> Self {
        Self::with_alternatives(self.first.clone(), self.rest.clone())
    }
}

impl<A: fmt::Debug, O, E> fmt::Debug for Each<A, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each")
            .field("first", &self.first)
            .field("rest", &self.rest)
            .finish()
    }
}

impl<A, O, E> Each<A, O, E>
where
    A: Deviation,
    A::Input: Clone,
    A::Done: Into<A::Next>,
    A::Error: Into<Fault>,
{
    /// Runs the element deviations over `input` without collapsing the
    /// per-index results.
    pub fn traverse(&self, input: Vec<A::Input>) -> Elements<A::Next> {
        let mut values = Vec::with_capacity(input.len());
        let mut errors = Vec::with_capacity(input.len());

        for element in input {
            match self.element(element) {
                Ok(value) => {
                    values.push(Some(value));
                    errors.push(None);
                }
                Err(error) => {
                    values.push(None);
                    errors.push(Some(error));
                }
            }
        }

        Elements { values, errors }
    }

    fn element(&self, element: A::Input) -> Result<A::Next, Fault> {
        let first_error = match self.first.deviate(element.clone()) {
            Outcome::Continue(value) => return Ok(value),
            Outcome::Done(value) => return Ok(value.into()),
            Outcome::Failed(error) => error.into(),
        };

        for alternative in &self.rest {
            match alternative.deviate(element.clone()) {
                Outcome::Continue(value) => return Ok(value),
                Outcome::Done(value) => return Ok(value.into()),
                Outcome::Failed(_) => {}
            }
        }

        Err(first_error)
    }
}

impl<A, O, E> Deviation for Each<A, O, E>
where
    A: Deviation,
    A::Input: Clone,
    A::Done: Into<A::Next>,
    A::Error: Into<Fault>,
    E: From<Fault>,
{
    type Input = Vec<A::Input>;
    type Next = Vec<A::Next>;
    type Done = O;
    type Error = E;

    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, O, E> {
        self.traverse(input).into_outcome()
    }
}

// ============================================================================
// TESTS
// ============================================================================
