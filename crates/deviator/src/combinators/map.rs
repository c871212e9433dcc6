//! Payload mapping combinators
//!
//! Infallible transforms applied to a single outcome variant:
//!
//! - [`MapNext`] - transforms the continue value
//! - [`MapDone`] - transforms the early-exit value
//! - [`MapErr`] - transforms the failure payload
//!
//! The other variants pass through untouched.

use crate::foundation::{Deviation, Outcome};

/// Transforms the continue value of a deviation.
#[derive(Debug, Clone, Copy)]
pub struct MapNext<D, F> {
    pub(crate) inner: D,
    pub(crate) f: F,
}

impl<D, F> MapNext<D, F> {
    pub const fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F, N> Deviation for MapNext<D, F>
where
    D: Deviation,
    F: Fn(D::Next) -> N,
{
    type Input = D::Input;
    type Next = N;
    type Done = D::Done;
    type Error = D::Error;

    fn deviate(&self, input: Self::Input) -> Outcome<N, D::Done, D::Error> {
        self.inner.deviate(input).map_next(&self.f)
    }
}

/// Transforms the early-exit value of a deviation.
#[derive(Debug, Clone, Copy)]
pub struct MapDone<D, F> {
    pub(crate) inner: D,
    pub(crate) f: F,
}

impl<D, F> MapDone<D, F> {
    pub const fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F, O> Deviation for MapDone<D, F>
where
    D: Deviation,
    F: Fn(D::Done) -> O,
{
    type Input = D::Input;
    type Next = D::Next;
    type Done = O;
    type Error = D::Error;

    fn deviate(&self, input: Self::Input) -> Outcome<D::Next, O, D::Error> {
        self.inner.deviate(input).map_done(&self.f)
    }
}

/// Transforms the failure payload of a deviation.
///
/// This is how a pipeline moves between error types, e.g. from the built-in
/// [`Fault`](crate::foundation::Fault) to an application error.
#[derive(Debug, Clone, Copy)]
pub struct MapErr<D, F> {
    pub(crate) inner: D,
    pub(crate) f: F,
}

impl<D, F> MapErr<D, F> {
    pub const fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F, E> Deviation for MapErr<D, F>
where
    D: Deviation,
    F: Fn(D::Error) -> E,
{
    type Input = D::Input;
    type Next = D::Next;
    type Done = D::Done;
    type Error = E;

    fn deviate(&self, input: Self::Input) -> Outcome<D::Next, D::Done, E> {
        self.inner.deviate(input).map_err(&self.f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
