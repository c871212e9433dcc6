//! Tracing adapter for deviations
//!
//! [`Traced`] runs a deviation and reports the outcome as a `tracing` event
//! under the `nebula_deviator` target:
//!
//! - `TRACE` for `Continue` and `Done`
//! - `DEBUG` for `Failed`
//!
//! Both events carry the pipeline `label` and the outcome `kind` as fields.
//! The outcome itself is returned unchanged.

use crate::foundation::{Deviation, Outcome};
use std::borrow::Cow;

/// Emits a tracing event for every invocation of the wrapped deviation.
#[derive(Debug, Clone)]
pub struct Traced<D> {
    pub(crate) inner: D,
    pub(crate) label: Cow<'static, str>,
}

impl<D> Traced<D> {
    pub fn new(inner: D, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    /// Returns the label reported with every event.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<D: Deviation> Deviation for Traced<D> {
    type Input = D::Input;
    type Next = D::Next;
    type Done = D::Done;
    type Error = D::Error;

    fn deviate(&self, input: Self::Input) -> Outcome<D::Next, D::Done, D::Error> {
        let outcome = self.inner.deviate(input);
        let kind = outcome.kind();
        if outcome.is_failed() {
            tracing::debug!(
                target: "nebula_deviator",
                label = %self.label,
                kind = %kind,
                "deviation failed"
            );
        } else {
            tracing::trace!(
                target: "nebula_deviator",
                label = %self.label,
                kind = %kind,
                "deviation succeeded"
            );
        }
        outcome
    }
}

// ============================================================================
// TESTS
// ============================================================================
