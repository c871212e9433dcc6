//! String transforms and checks
//!
//! Transforms (`trim`, `lowercase`, `uppercase`, `replace`) always continue.
//! `not_empty` and `to_number` can fail.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let amount = deviate::<String>().replace(",", ".").trim().not_empty().to_number();
//! assert_eq!(amount.deviate("  12,5  ".into()), next(12.5));
//! assert_eq!(amount.deviate("   ".into()), failed(Fault::code("empty")));
//! ```

use crate::foundation::{Deviation, Deviator, Fault, Outcome, Stage, codes, guard};
use crate::validators::reject;

impl<D> Deviator<D>
where
    D: Deviation<Next = String>,
    D::Error: From<Fault>,
{
    /// Removes leading and trailing whitespace, including the byte order mark.
    pub fn trim(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        self.append(|text| Outcome::Continue(text.trim_matches(is_blank).to_owned()))
    }

    /// Converts to lowercase.
    pub fn lowercase(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        self.append(|text| Outcome::Continue(text.to_lowercase()))
    }

    /// Converts to uppercase.
    pub fn uppercase(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        self.append(|text| Outcome::Continue(text.to_uppercase()))
    }

    /// Requires at least one character.
    pub fn not_empty(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        guard(self, codes::EMPTY, |text: &String| !text.is_empty())
    }

    /// Replaces the first occurrence of `from` with `to`.
    pub fn replace(
        self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        let (from, to) = (from.into(), to.into());
        self.append(move |text| Outcome::Continue(text.replacen(&from, &to, 1)))
    }

    /// Parses the string as a finite number.
    ///
    /// See [`parse_number`] for the accepted syntax. `Infinity` and literals
    /// that overflow `f64` fail: a JSON number cannot hold them.
    pub fn to_number(self) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        self.append(|text| match parse_number(&text) {
            Some(number) if number.is_finite() => Outcome::Continue(number),
            _ => reject(codes::NOT_A_NUMBER),
        })
    }
}

// ============================================================================
// NUMBER PARSING
// ============================================================================

/// Parses a numeric literal leniently.
///
/// - surrounding whitespace is ignored and a blank string is `0`
/// - `Infinity` with an optional sign
/// - unsigned `0x`, `0o` and `0b` integer literals
/// - decimal literals with optional sign, fraction and exponent
///
/// Anything else, including `inf` or `NaN`, returns `None`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(parse_number(" 69.1 "), Some(69.1));
/// assert_eq!(parse_number(""), Some(0.0));
/// assert_eq!(parse_number("0x1F"), Some(31.0));
/// assert_eq!(parse_number(".1a"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_matches(is_blank);

    match text {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    let is_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return None;
    }
    text.parse().ok()
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

// ============================================================================
// TESTS
// ============================================================================
