//! Presence checks on optional values
//!
//! `None` models an absent value (a missing object property, an unset
//! field). These primitives decide what a pipeline does with it.

use crate::foundation::{Deviation, Deviator, Fault, Outcome, Stage, codes};
use crate::validators::reject;

impl<D, T> Deviator<D>
where
    D: Deviation<Next = Option<T>>,
    D::Error: From<Fault>,
{
    /// Stops the pipeline with `Done(None)` for an absent value, otherwise
    /// continues with the present one.
    pub fn optional(self) -> Deviator<impl Stage<D::Input, T, D::Done, D::Error>>
    where
        D::Done: From<Option<T>>,
    {
        self.append(|value| match value {
            Some(value) => Outcome::Continue(value),
            None => Outcome::Done(Option::<T>::None.into()),
        })
    }

    /// Requires a present value and continues with it.
    pub fn defined(self) -> Deviator<impl Stage<D::Input, T, D::Done, D::Error>> {
        self.append(|value| match value {
            Some(value) => Outcome::Continue(value),
            None => reject(codes::UNDEFINED),
        })
    }

    /// Requires an absent value.
    pub fn undefined(self) -> Deviator<impl Stage<D::Input, (), D::Done, D::Error>> {
        self.append(|value| match value {
            Some(_) => reject(codes::NOT_UNDEFINED),
            None => Outcome::Continue(()),
        })
    }
}
