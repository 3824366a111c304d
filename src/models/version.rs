//! Toolkit version strings, for example 4.0b2pre or 3.6.*
//!
//! Every dot separated segment decomposes into four parts: a leading number,
//! a qualifier, a second number and whatever trails after that. `4.0b2pre`
//! has segments `4` and `0b2pre`, the latter being `(0, "b", 2, "pre")`.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::compare::compare_parts;
use crate::parser::parse_version;

/// Numeric run of a version segment. Only the `*` wildcard produces
/// `Infinite`, which sorts above every finite number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartNumber {
    Finite(i64),
    Infinite,
}

impl PartNumber {
    pub const ZERO: PartNumber = PartNumber::Finite(0);

    pub fn increment(self) -> Self {
        match self {
            PartNumber::Finite(n) => PartNumber::Finite(n.saturating_add(1)),
            PartNumber::Infinite => PartNumber::Infinite,
        }
    }
}

impl Default for PartNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{}", n),
            Self::Infinite => write!(f, "*"),
        }
    }
}

/// One dot separated segment of a version string
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VersionPart {
    pub num_a: PartNumber,
    pub str_b: String,
    pub num_c: PartNumber,
    pub extra_d: String,
}

impl VersionPart {
    /// The `*` segment, newer than anything concrete
    pub fn wildcard() -> Self {
        Self { num_a: PartNumber::Infinite, ..Self::default() }
    }

    /// Missing segments compare as this part, so `1.0` and `1` are equal.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_parts(self, other)
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed version string. Ordering and equality follow the toolkit rules
/// rather than the text, so `1.0`, `1` and `1.0.0` are all equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    raw: String,
    parts: Vec<VersionPart>,
}

impl Version {
    pub fn new(raw: &str) -> Self {
        parse_version(raw)
    }

    pub(crate) fn from_parts(raw: String, parts: Vec<VersionPart>) -> Self {
        Self { raw, parts }
    }

    pub fn wildcard() -> Self {
        Self::new("*")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    /// Versions like "" or "0" which callers use when the real version
    /// could not be determined.
    pub fn is_unknown(&self) -> bool {
        self.significant_parts().is_empty()
    }

    // Trailing empty parts never affect ordering
    fn significant_parts(&self) -> &[VersionPart] {
        let len = self.parts.iter().rposition(|p| !p.is_empty()).map_or(0, |i| i + 1);
        &self.parts[..len]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let missing = VersionPart::default();

        self.parts
            .iter()
            .zip_longest(other.parts.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => compare_parts(a, b),
                EitherOrBoth::Left(a) => compare_parts(a, &missing),
                EitherOrBoth::Right(b) => compare_parts(&missing, b),
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_parts().hash(state);
    }
}

impl FromStr for Version {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Version, Self::Err> {
        Ok(Self::new(input))
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Version {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
