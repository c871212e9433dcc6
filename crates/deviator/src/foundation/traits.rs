//! Core traits for the deviation system
//!
//! This module defines the [`Deviation`] contract every step of a pipeline
//! implements, plus the small adapters that let closures, boxed trait objects
//! and shared references take part in a pipeline.

use crate::foundation::Outcome;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

// ============================================================================
// CORE DEVIATION TRAIT
// ============================================================================

/// The core trait that every pipeline step implements.
///
/// A deviation maps one input to one three-way [`Outcome`]. It is pure and
/// total: domain violations are reported as [`Outcome::Failed`], never by
/// panicking, and the same input always yields the same outcome.
///
/// # Type Parameters
///
/// * `Input` - The value handed to the step
/// * `Next` - The continue payload, fed into the following step
/// * `Done` - The early-exit payload
/// * `Error` - The failure payload
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_deviator::foundation::{Deviation, Fault, Outcome, failed, next};
///
/// struct NonZero;
///
/// impl Deviation for NonZero {
///     type Input = f64;
///     type Next = f64;
///     type Done = f64;
///     type Error = Fault;
///
///     fn deviate(&self, input: f64) -> Outcome<f64, f64, Fault> {
///         if input == 0.0 { failed("zero".into()) } else { next(input) }
///     }
/// }
/// ```
pub trait Deviation {
    /// The type handed to the step.
    type Input;

    /// The continue payload.
    type Next;

    /// The early-exit payload.
    type Done;

    /// The failure payload.
    type Error;

    /// Runs the step against one input.
    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, Self::Done, Self::Error>;
}

/// Shorthand bound naming all four types of a deviation.
///
/// Implemented for every [`Deviation`]; used by builder methods that return
/// `impl Stage<...>`.
pub trait Stage<I, N, O, E>: Deviation<Input = I, Next = N, Done = O, Error = E> {}

impl<T, I, N, O, E> Stage<I, N, O, E> for T where
    T: Deviation<Input = I, Next = N, Done = O, Error = E> + ?Sized
{
}

/// A type-erased deviation, used to mix steps of different concrete types in
/// one alternative list or schema.
pub type BoxDeviation<'a, I, N, O, E> =
    Box<dyn Deviation<Input = I, Next = N, Done = O, Error = E> + Send + Sync + 'a>;

impl<T> Deviation for &T
where
    T: Deviation + ?Sized,
{
    type Input = T::Input;
    type Next = T::Next;
    type Done = T::Done;
    type Error = T::Error;

    #[inline]
    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, Self::Done, Self::Error> {
        (**self).deviate(input)
    }
}

impl<T> Deviation for Box<T>
where
    T: Deviation + ?Sized,
{
    type Input = T::Input;
    type Next = T::Next;
    type Done = T::Done;
    type Error = T::Error;

    #[inline]
    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, Self::Done, Self::Error> {
        (**self).deviate(input)
    }
}

impl<T> Deviation for Arc<T>
where
    T: Deviation + ?Sized,
{
    type Input = T::Input;
    type Next = T::Next;
    type Done = T::Done;
    type Error = T::Error;

    #[inline]
    fn deviate(&self, input: Self::Input) -> Outcome<Self::Next, Self::Done, Self::Error> {
        (**self).deviate(input)
    }
}

// ============================================================================
// CLOSURE ADAPTER
// ============================================================================

/// Adapts a closure `Fn(I) -> Outcome<N, O, E>` into a [`Deviation`].
///
/// The input type is pinned by `I` because a closure alone does not name it
/// as an associated type.
pub struct FnDeviation<I, F> {
    step: F,
    _input: PhantomData<fn(I)>,
}

impl<I, F> FnDeviation<I, F> {
    /// Wraps `step`.
    pub const fn new(step: F) -> Self {
        Self {
            step,
            _input: PhantomData,
        }
    }
}

impl<I, F: Clone> Clone for FnDeviation<I, F> {
    fn clone(&self) -> Self {
        Self::new(self.step.clone())
    }
}

impl<I, F> fmt::Debug for FnDeviation<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDeviation")
            .field("input", &std::any::type_name::<I>())
            .finish_non_exhaustive()
    }
}

impl<I, F, N, O, E> Deviation for FnDeviation<I, F>
where
    F: Fn(I) -> Outcome<N, O, E>,
{
    type Input = I;
    type Next = N;
    type Done = O;
    type Error = E;

    #[inline]
    fn deviate(&self, input: I) -> Outcome<N, O, E> {
        (self.step)(input)
    }
}

/// Creates a deviation from a closure.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_deviator::foundation::{Deviation, Outcome, deviation_fn, next};
///
/// let double = deviation_fn(|x: i32| -> Outcome<i32, i32, ()> { next(x * 2) });
/// assert_eq!(double.deviate(2), next(4));
/// ```
pub const fn deviation_fn<I, F, N, O, E>(step: F) -> FnDeviation<I, F>
where
    F: Fn(I) -> Outcome<N, O, E>,
{
    FnDeviation::new(step)
}

// ============================================================================
// IDENTITY
// ============================================================================

/// The neutral deviation: always `Continue(input)`.
///
/// `O` and `E` only fix the early-exit and failure types of pipelines built
/// on top of it.
pub struct Identity<I, O, E> {
    _marker: PhantomData<fn(I) -> (O, E)>,
}

impl<I, O, E> Identity<I, O, E> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I, O, E> Default for Identity<I, O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O, E> Clone for Identity<I, O, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O, E> Copy for Identity<I, O, E> {}

impl<I, O, E> fmt::Debug for Identity<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{}>", std::any::type_name::<I>())
    }
}

impl<I, O, E> Deviation for Identity<I, O, E> {
    type Input = I;
    type Next = I;
    type Done = O;
    type Error = E;

    #[inline]
    fn deviate(&self, input: I) -> Outcome<I, O, E> {
        Outcome::Continue(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
