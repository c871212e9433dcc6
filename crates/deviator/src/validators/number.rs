//! Numeric comparisons, sign checks and rounding

use crate::foundation::{Deviation, Deviator, Fault, Outcome, Stage, codes, guard};

impl<D> Deviator<D>
where
    D: Deviation<Next = f64>,
    D::Error: From<Fault>,
{
    /// Requires `value >= bound`.
    pub fn min(self, bound: f64) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::MIN, move |value: &f64| *value >= bound)
    }

    /// Requires `value <= bound`.
    pub fn max(self, bound: f64) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::MAX, move |value: &f64| *value <= bound)
    }

    /// Requires `value > bound`.
    pub fn greater(self, bound: f64) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::GREATER, move |value: &f64| *value > bound)
    }

    /// Requires `value < bound`.
    pub fn less(self, bound: f64) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::LESS, move |value: &f64| *value < bound)
    }

    /// Requires a finite value without a fractional part.
    pub fn integer(self) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::INTEGER, |value: &f64| {
            value.is_finite() && value.fract() == 0.0
        })
    }

    /// Requires `value > 0`.
    pub fn positive(self) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::POSITIVE, |value: &f64| *value > 0.0)
    }

    /// Requires `value < 0`.
    pub fn negative(self) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        guard(self, codes::NEGATIVE, |value: &f64| *value < 0.0)
    }

    /// Rounds to `places` decimal places, halves away from zero.
    pub fn round(self, places: u8) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        self.append(move |value| Outcome::Continue(round_to(value, places)))
    }
}

fn round_to(value: f64, places: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(places));
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
