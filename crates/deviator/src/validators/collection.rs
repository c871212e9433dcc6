//! Size checks and structured traversal
//!
//! - `Vec<T>` pipelines get length checks and element traversal
//!   ([`each`](Deviator::each), [`each_of`](Deviator::each_of))
//! - JSON object pipelines get per-key traversal ([`shape`](Deviator::shape))

use crate::combinators::{Each, Shape, ShapeDeviation, Then};
use crate::foundation::{Deviation, Deviator, Fault, Stage, codes, guard};
use serde_json::{Map, Value};

// ============================================================================
// SEQUENCES
// ============================================================================

impl<D, T> Deviator<D>
where
    D: Deviation<Next = Vec<T>>,
    D::Error: From<Fault>,
{
    /// Requires at least `min` elements.
    pub fn min_size(
        self,
        min: usize,
    ) -> Deviator<impl Stage<D::Input, Vec<T>, D::Done, D::Error>> {
        guard(self, codes::MIN_SIZE, move |items: &Vec<T>| items.len() >= min)
    }

    /// Requires at most `max` elements.
    pub fn max_size(
        self,
        max: usize,
    ) -> Deviator<impl Stage<D::Input, Vec<T>, D::Done, D::Error>> {
        guard(self, codes::MAX_SIZE, move |items: &Vec<T>| items.len() <= max)
    }

    /// Requires exactly `size` elements.
    pub fn size(
        self,
        size: usize,
    ) -> Deviator<impl Stage<D::Input, Vec<T>, D::Done, D::Error>> {
        guard(self, codes::SIZE, move |items: &Vec<T>| items.len() == size)
    }

    /// Runs `element` on every element.
    ///
    /// A `Done` from `element` fills its slot like a `Continue`, so the early
    /// exit type of `element` must convert into its continue type. In the
    /// JSON domain, finish element pipelines with `.map(Value::from)`.
    ///
    /// Continues with the transformed elements when all succeed, otherwise
    /// fails with [`Fault::Elements`]: one slot per input element, `None`
    /// where the element succeeded.
    pub fn each<A>(self, element: A) -> Deviator<Then<D, Each<A, D::Done, D::Error>>>
    where
        A: Deviation<Input = T>,
        A::Done: Into<A::Next>,
        A::Error: Into<Fault>,
        T: Clone,
    {
        self.then(Each::new(element))
    }

    /// Runs `first`, then each of `rest` until one succeeds, on every element.
    ///
    /// A failing slot reports the error of `first`.
    pub fn each_of<A>(
        self,
        first: A,
        rest: impl IntoIterator<Item = A>,
    ) -> Deviator<Then<D, Each<A, D::Done, D::Error>>>
    where
        A: Deviation<Input = T>,
        A::Done: Into<A::Next>,
        A::Error: Into<Fault>,
        T: Clone,
    {
        self.then(Each::with_alternatives(first, rest))
    }
}

// ============================================================================
// OBJECTS
// ============================================================================

impl<D> Deviator<D>
where
    D: Deviation<Next = Map<String, Value>>,
    D::Error: From<Fault>,
{
    /// Runs the deviation of every `shape` key against the matching property.
    ///
    /// Continues with an object holding exactly the shape's keys when all
    /// succeed, otherwise fails with [`Fault::Fields`] holding only the
    /// failing keys.
    pub fn shape(self, shape: Shape) -> Deviator<Then<D, ShapeDeviation<D::Done, D::Error>>> {
        self.then(ShapeDeviation::new(shape))
    }
}
