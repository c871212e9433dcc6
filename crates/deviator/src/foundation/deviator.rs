//! Pipeline builder
//!
//! [`Deviator`] wraps a deviation and exposes the composition operations.
//! Every operation consumes the builder and returns a new one, so a built
//! pipeline is never mutated afterwards and can be invoked any number of
//! times, from any number of threads when its parts are `Send + Sync`.
//!
//! Type-specific primitives (string, number, collection, ...) are added by
//! the [`validators`](crate::validators) module as further `impl` blocks,
//! available only when the pipeline's continue type matches.
//!
//! # Examples
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
//! ```

use crate::combinators::{MapDone, MapErr, MapNext, Or, Then, Traced};
use crate::foundation::{
    BoxDeviation, Deviation, Fault, FnDeviation, Identity, Outcome, Stage, codes,
};
use crate::validators::{ensure, reject};
use std::borrow::Cow;

// ============================================================================
// DEVIATOR
// ============================================================================

/// A composable pipeline of deviations.
///
/// # Type Parameters
///
/// * `D` - The composed deviation; grows with every builder call
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "a pipeline does nothing until it is invoked"]
pub struct Deviator<D> {
    inner: D,
}

/// Starts a pipeline over `I` with the built-in [`Fault`] error type.
///
/// The early-exit type is `I` as well, so primitives such as `optional` and
/// `nullable` can stop with (part of) the original input.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_deviator::prelude::*;
///
/// let name = deviate::<String>().trim().not_empty();
/// ```
pub fn deviate<I>() -> Deviator<Identity<I, I, Fault>> {
    Deviator::identity()
}

impl<I, O, E> Deviator<Identity<I, O, E>> {
    /// Starts a pipeline with caller-chosen early-exit and error types.
    pub const fn identity() -> Self {
        Self::new(Identity::new())
    }
}

impl<D> Deviator<D> {
    /// Wraps an existing deviation.
    pub const fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Deviation> Deviation for Deviator<D> {
    type Input = D::Input;
    type Next = D::Next;
    type Done = D::Done;
    type Error = D::Error;

    #[inline]
    fn deviate(&self, input: Self::Input) -> Outcome<D::Next, D::Done, D::Error> {
        self.inner.deviate(input)
    }
}

// ============================================================================
// COMPOSITION
// ============================================================================

impl<D: Deviation> Deviator<D> {
    /// Runs the pipeline against one input.
    #[inline]
    pub fn deviate(&self, input: D::Input) -> Outcome<D::Next, D::Done, D::Error> {
        self.inner.deviate(input)
    }

    /// Views the pipeline as a plain function.
    pub fn as_fn(&self) -> impl Fn(D::Input) -> Outcome<D::Next, D::Done, D::Error> + '_ {
        move |input| self.inner.deviate(input)
    }

    /// Chains another deviation after this pipeline.
    ///
    /// `next` receives the continue value. `Done` and `Failed` outcomes are
    /// returned unchanged and `next` is not invoked. The early-exit and failure
    /// payloads of `next` are converted with `Into`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let trimmed = deviate::<String>().trim();
    /// let pipeline = deviate::<Value>().as_string().then(trimmed);
    /// ```
    pub fn then<B>(self, next: B) -> Deviator<Then<D, B>>
    where
        B: Deviation<Input = D::Next>,
        B::Done: Into<D::Done>,
        B::Error: Into<D::Error>,
    {
        Deviator::new(Then::new(self.inner, next))
    }

    /// Chains a custom step given as a closure.
    ///
    /// Same short-circuit behavior as [`then`](Self::then). Every built-in
    /// primitive is written with `append`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let even = deviate::<f64>().append(|x| {
    ///     if x % 2.0 == 0.0 { next(x) } else { failed(Fault::code("odd")) }
    /// });
    /// ```
    pub fn append<N, F>(self, step: F) -> Deviator<Then<D, FnDeviation<D::Next, F>>>
    where
        F: Fn(D::Next) -> Outcome<N, D::Done, D::Error>,
    {
        self.then(FnDeviation::new(step))
    }

    /// Transforms the continue value.
    pub fn map<N, F>(self, f: F) -> Deviator<MapNext<D, F>>
    where
        F: Fn(D::Next) -> N,
    {
        Deviator::new(MapNext::new(self.inner, f))
    }

    /// Transforms the failure payload, changing the pipeline's error type.
    pub fn map_err<E, F>(self, f: F) -> Deviator<MapErr<D, F>>
    where
        F: Fn(D::Error) -> E,
    {
        Deviator::new(MapErr::new(self.inner, f))
    }

    /// Transforms the early-exit payload, changing the pipeline's done type.
    pub fn map_done<O, F>(self, f: F) -> Deviator<MapDone<D, F>>
    where
        F: Fn(D::Done) -> O,
    {
        Deviator::new(MapDone::new(self.inner, f))
    }

    /// Replaces the continue value with a clone of `value`.
    pub fn set<V>(
        self,
        value: V,
    ) -> Deviator<impl Stage<D::Input, V, D::Done, D::Error>>
    where
        V: Clone,
    {
        self.map(move |_| value.clone())
    }

    /// Tries `alternatives` in order against the continue value.
    ///
    /// The first success wins and continues the pipeline; a winning `Done` is
    /// turned into `Continue`. When every alternative fails, or the list is
    /// empty, the pipeline fails with the `no_match` token.
    ///
    /// Alternatives share one type; use [`boxed`](Self::boxed) to mix kinds.
    pub fn or<A>(
        self,
        alternatives: impl IntoIterator<Item = A>,
    ) -> Deviator<Then<D, Or<A, D::Done, D::Error>>>
    where
        A: Deviation<Input = D::Next>,
        A::Done: Into<A::Next>,
        D::Next: Clone,
        D::Error: From<Fault>,
    {
        self.then(Or::new(alternatives))
    }

    /// Requires the continue value to equal one of `options`.
    pub fn options(
        self,
        options: impl IntoIterator<Item = D::Next>,
    ) -> Deviator<impl Stage<D::Input, D::Next, D::Done, D::Error>>
    where
        D::Next: PartialEq,
        D::Error: From<Fault>,
    {
        let options: Vec<D::Next> = options.into_iter().collect();
        self.append(move |value| {
            let allowed = options.contains(&value);
            ensure(value, allowed, codes::NOT_OPTION)
        })
    }

    /// Erases the pipeline type.
    pub fn boxed<'a>(self) -> Deviator<BoxDeviation<'a, D::Input, D::Next, D::Done, D::Error>>
    where
        D: Send + Sync + 'a,
    {
        let inner: BoxDeviation<'a, D::Input, D::Next, D::Done, D::Error> = Box::new(self.inner);
        Deviator::new(inner)
    }

    /// Emits a `tracing` event with `label` for every invocation.
    pub fn traced(self, label: impl Into<Cow<'static, str>>) -> Deviator<Traced<D>> {
        Deviator::new(Traced::new(self.inner, label))
    }
}

/// Fails the pipeline with `code` unless `check` holds for the value.
pub(crate) fn guard<D, F>(
    deviator: Deviator<D>,
    code: &'static str,
    check: F,
) -> Deviator<impl Stage<D::Input, D::Next, D::Done, D::Error>>
where
    D: Deviation,
    D::Error: From<Fault>,
    F: Fn(&D::Next) -> bool,
{
    deviator.append(move |value| {
        if check(&value) {
            Outcome::Continue(value)
        } else {
            reject(code)
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================
