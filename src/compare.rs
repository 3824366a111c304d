//! Three-way comparison of toolkit version strings
//!
//! Versions are compared segment by segment, left to right, stopping at the
//! first segment that differs. A version with fewer segments is padded with
//! empty ones, so `1.0` equals `1` and `1.0.0`. Within a segment the four
//! parts are compared in order: leading number, qualifier, second number,
//! trailing text.
//!
//! Qualifiers sort with one twist: an empty qualifier is newer than any
//! non-empty one, which is what makes `2.0` newer than `2.0b1`.
//!
//! Comparison is total. Nothing is rejected, numbers that can't be read
//! count as zero.
use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};
use tracing::{event, instrument, Level};

use crate::models::{PartNumber, VersionPart};
use crate::parser::parse_version_part;

/// Returns -1, 0 or 1 as `a` is older than, equal to or newer than `b`
pub fn compare_versions(a: &str, b: &str) -> i32 {
    compare(a, b) as i32
}

#[instrument(level = "trace")]
pub fn compare(a: &str, b: &str) -> Ordering {
    let result = a
        .split('.')
        .zip_longest(b.split('.'))
        .enumerate()
        .map(|(i, segments)| {
            let (left, right) = match segments {
                EitherOrBoth::Both(l, r) => (Some(l), Some(r)),
                EitherOrBoth::Left(l) => (Some(l), None),
                EitherOrBoth::Right(r) => (None, Some(r)),
            };
            (i, compare_version_parts(left, right))
        })
        .find(|(_, ordering)| ordering.is_ne());

    match result {
        Some((i, ordering)) => {
            event!(Level::TRACE, "'{}' and '{}' differ at segment {}: {:?}", a, b, i, ordering);
            ordering
        }
        None => Ordering::Equal,
    }
}

/// Compares two segments, either of which may be missing
pub fn compare_version_parts(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_parts(&parse_version_part(a), &parse_version_part(b))
}

pub fn compare_parts(a: &VersionPart, b: &VersionPart) -> Ordering {
    compare_numbers(a.num_a, b.num_a)
        .then_with(|| compare_qualifiers(&a.str_b, &b.str_b))
        .then_with(|| compare_numbers(a.num_c, b.num_c))
        .then_with(|| compare_qualifiers(&a.extra_d, &b.extra_d))
}

// Unreadable runs were already read as zero by the parser
fn compare_numbers(a: PartNumber, b: PartNumber) -> Ordering {
    a.cmp(&b)
}

/// Like `str::cmp`, except that the empty string is the greatest
fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        assert_eq!(compare_versions("1.0", "1.0"), 0);
        assert_eq!(compare_versions("1.0", "1"), 0);
        assert_eq!(compare_versions("1", "1.0.0.0"), 0);
        assert_eq!(compare_versions("", ""), 0);
        assert_eq!(compare_versions("", "0"), 0);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(compare_versions("1.0", "2.0"), -1);
        assert_eq!(compare_versions("2.0", "1.0"), 1);
        assert_eq!(compare_versions("1.9", "1.10"), -1);
        assert_eq!(compare_versions("3.6.28", "3.6.3"), 1);
        assert_eq!(compare_versions("1.0.1", "1.0"), 1);
    }

    #[test]
    fn test_release_beats_prerelease() {
        assert_eq!(compare_versions("2.0", "2.0b1"), 1);
        assert_eq!(compare_versions("2.0b1", "2.0"), -1);
        assert_eq!(compare_versions("2.0a1", "2.0b1"), -1);
        assert_eq!(compare_versions("2.0b1", "2.0b2"), -1);
        assert_eq!(compare_versions("2.0b10", "2.0b2"), 1);
        assert_eq!(compare_versions("1.0", "1.0.0a1"), 1);
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(compare_versions("1.0", "*"), -1);
        assert_eq!(compare_versions("*", "1.0"), 1);
        assert_eq!(compare_versions("*", "*"), 0);
        assert_eq!(compare_versions("3.6.*", "3.6.99"), 1);
        assert_eq!(compare_versions("3.6.*", "3.7"), -1);
    }

    #[test]
    fn test_plus_means_next_pre() {
        assert_eq!(compare_versions("1.0+", "1.1pre"), 0);
        assert_eq!(compare_versions("1.0+", "1.0"), 1);
        assert_eq!(compare_versions("1.0+", "1.1"), -1);
    }

    #[test]
    fn test_trailing_text_after_qualifier() {
        // segments 0b2pre and 0b2 only differ in trailing text, and empty
        // trailing text is the newer one
        assert_eq!(compare_versions("4.0b2pre", "4.0b2"), -1);
        assert_eq!(compare_versions("4.0b2", "4.0b2pre"), 1);
        assert_eq!(compare_versions("4.0b2pre", "4.0b3pre"), -1);
    }

    #[test]
    fn test_unreadable_numbers_are_zero() {
        assert_eq!(compare_versions("-.1", "0.1"), 0);
        assert_eq!(compare_versions("--5", "0"), 0);
        assert_eq!(compare_versions("-1", "0"), -1);
        assert_eq!(compare_versions("1-5", "1"), 0);
    }

    #[test]
    fn test_qualifier_order() {
        assert_eq!(compare_qualifiers("", ""), Ordering::Equal);
        assert_eq!(compare_qualifiers("", "a"), Ordering::Greater);
        assert_eq!(compare_qualifiers("a", ""), Ordering::Less);
        assert_eq!(compare_qualifiers("a", "b"), Ordering::Less);
        assert_eq!(compare_qualifiers("pre", "b"), Ordering::Greater);
    }

    #[test]
    fn test_missing_segments() {
        assert_eq!(compare_version_parts(None, None), Ordering::Equal);
        assert_eq!(compare_version_parts(Some("0"), None), Ordering::Equal);
        assert_eq!(compare_version_parts(Some("a"), None), Ordering::Less);
        assert_eq!(compare_version_parts(None, Some("1")), Ordering::Less);
    }

    #[test]
    fn test_odd_inputs() {
        assert_eq!(compare_versions("...", ""), 0);
        assert_eq!(compare_versions("1.0\n", "1.0"), -1);
        assert_eq!(compare_versions("ü", "ü"), 0);
        assert_eq!(compare_versions("1.é", "1.e"), 1);
    }
}
