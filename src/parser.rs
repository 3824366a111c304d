//! Version strings come from add-on manifests, user agents and compatibility
//! ranges, and are loose enough that no input is rejected.

mod common;
mod version;

use tracing::{event, Level};

use self::version::version_part;

use crate::models::{Version, VersionPart};

/// Parses a single dot separated segment. A missing segment reads the same
/// as an empty one.
pub fn parse_version_part(segment: Option<&str>) -> VersionPart {
    segment.map(version_part).unwrap_or_default()
}

pub fn parse_version(input: &str) -> Version {
    let parts: Vec<VersionPart> = input.split('.').map(version_part).collect();
    event!(Level::TRACE, "Parsed version '{}': {:?}", input, parts);

    Version::from_parts(input.to_string(), parts)
}
