//! Regex-backed string checks
//!
//! Available with the `patterns` feature (on by default).

use crate::foundation::{Deviation, Deviator, Fault, Outcome, Stage, codes, guard};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").unwrap());

static GUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

impl<D> Deviator<D>
where
    D: Deviation<Next = String>,
    D::Error: From<Fault>,
{
    /// Requires a loose `local@domain` shape: no whitespace, one `@` between
    /// non-empty parts.
    pub fn email(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        guard(self, codes::NOT_EMAIL, |text: &String| EMAIL_REGEX.is_match(text))
    }

    /// Requires an RFC 4122 GUID (versions 1-5), in any letter case.
    pub fn guid(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        guard(self, codes::NOT_GUID, |text: &String| GUID_REGEX.is_match(text))
    }

    /// Requires a match of `pattern` somewhere in the string.
    pub fn matches(
        self,
        pattern: Regex,
    ) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        guard(self, codes::NO_REGEX_MATCH, move |text: &String| pattern.is_match(text))
    }

    /// Replaces the first match of `pattern` with `to`.
    ///
    /// `to` may reference capture groups as `$1` or `${name}`.
    pub fn replace_regex(
        self,
        pattern: Regex,
        to: impl Into<String>,
    ) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        let to = to.into();
        self.append(move |text| {
            Outcome::Continue(pattern.replace(&text, to.as_str()).into_owned())
        })
    }
}
