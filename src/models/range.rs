//! Inclusive version ranges such as an add-on's min/max app version
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Version;

/// Both ends are inclusive. Overrides arrive as `["min", "max"]` pairs so
/// that is also the serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Version, Version)", into = "(Version, Version)")]
pub struct VersionRange {
    pub min: Version,
    pub max: Version,
}

impl VersionRange {
    pub fn new(min: impl Into<Version>, max: impl Into<Version>) -> Self {
        Self { min: min.into(), max: max.into() }
    }

    pub fn contains(&self, version: &Version) -> bool {
        version >= &self.min && version <= &self.max
    }
}

impl From<(Version, Version)> for VersionRange {
    fn from((min, max): (Version, Version)) -> Self {
        Self { min, max }
    }
}

impl From<VersionRange> for (Version, Version) {
    fn from(range: VersionRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
