//! Property-based tests for version ordering
//!
//! The comparator has to behave as a total order over every string, not just
//! well formed versions, since add-on metadata in the wild is messy.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use vercmp::{compare_versions, Version};

/// Segments built from the pieces toolkit versions are made of, including
/// the odd ones: wildcards, plus signs, stray minus signs
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just(String::new()),
        "-?[0-9]{0,3}(a|b|pre|rc|\\+|-)?[0-9]{0,2}(pre|a)?",
        "[0-9]{1,2}",
    ]
}

fn version_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::collection::vec(segment_strategy(), 1..5).prop_map(|s| s.join(".")),
        1 => any::<String>(),
    ]
}

fn hash_of(version: &Version) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn total_over_arbitrary_strings(a in any::<String>(), b in any::<String>()) {
        let result = compare_versions(&a, &b);
        prop_assert!((-1..=1).contains(&result));
    }

    #[test]
    fn reflexive(a in version_strategy()) {
        prop_assert_eq!(compare_versions(&a, &a), 0);
    }

    #[test]
    fn antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(compare_versions(&a, &b), -compare_versions(&b, &a));
    }

    #[test]
    fn transitive(a in version_strategy(), b in version_strategy(), c in version_strategy()) {
        if compare_versions(&a, &b) <= 0 && compare_versions(&b, &c) <= 0 {
            prop_assert!(compare_versions(&a, &c) <= 0);
        }
    }

    #[test]
    fn parsed_versions_agree_with_strings(a in version_strategy(), b in version_strategy()) {
        let ordering = Version::new(&a).cmp(&Version::new(&b));
        prop_assert_eq!(ordering as i32, compare_versions(&a, &b));
    }

    #[test]
    fn equal_versions_hash_equal(a in version_strategy(), padding in 0usize..3) {
        let padded = format!("{}{}", a, ".0".repeat(padding));
        let (x, y) = (Version::new(&a), Version::new(&padded));

        if x == y {
            prop_assert_eq!(hash_of(&x), hash_of(&y));
        }
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(compare_versions("1.0", "1.0"), 0);
    assert_eq!(compare_versions("1.0", "2.0"), -1);
    assert_eq!(compare_versions("2.0", "1.0"), 1);
    assert_eq!(compare_versions("2.0", "2.0b1"), 1);
    assert_eq!(compare_versions("2.0b1", "2.0b2"), -1);
    assert_eq!(compare_versions("1.0", "*"), -1);
    assert_eq!(compare_versions("1.0+", "1.1pre"), 0);
    assert_eq!(compare_versions("4.0b2pre", "4.0b2"), -1);
}
