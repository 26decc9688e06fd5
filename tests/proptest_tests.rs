// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify that key parsing, specificity scoring, and the
//! config map hold their invariants for arbitrary inputs.

use proptest::prelude::*;
use scopecfg::domain::{ConfigEntry, ConfigError, ConfigMap, ConfigValue};

prop_compose! {
    fn segment()(s in "[a-z][a-z0-9_]{0,11}") -> String {
        s
    }
}

prop_compose! {
    fn selector()(s in prop_oneof![Just("*".to_string()), segment()]) -> String {
        s
    }
}

// A key needs at least env + one path segment.
proptest! {
    #[test]
    fn test_parse_accepts_well_formed_keys(
        env in selector(),
        path in prop::collection::vec(segment(), 1..5),
    ) {
        let full_key = format!("{}.{}", env, path.join("."));
        let entry = ConfigEntry::parse(&full_key, "value", false).unwrap();
        prop_assert_eq!(entry.key(), path.join("."));
        prop_assert_eq!(entry.full_key(), full_key);
    }
}

proptest! {
    #[test]
    fn test_parse_rejects_single_segment(env in segment()) {
        let result = ConfigEntry::parse(&env, "value", false);
        prop_assert!(
            matches!(result, Err(ConfigError::InvalidKey { .. })),
            "expected InvalidKey error",
        );
    }
}

// Domain mode needs env + domain + at least one path segment.
proptest! {
    #[test]
    fn test_domain_mode_rejects_two_segments(
        env in selector(),
        path in segment(),
    ) {
        let full_key = format!("{}.{}", env, path);
        let result = ConfigEntry::parse(&full_key, "value", true);
        prop_assert!(
            matches!(result, Err(ConfigError::InvalidKey { .. })),
            "expected InvalidKey error",
        );
    }
}

proptest! {
    #[test]
    fn test_wildcard_rejected_in_path(
        env in segment(),
        head in segment(),
        tail in segment(),
    ) {
        let full_key = format!("{}.{}.*.{}", env, head, tail);
        let result = ConfigEntry::parse(&full_key, "value", false);
        prop_assert!(
            matches!(result, Err(ConfigError::InvalidKey { .. })),
            "expected InvalidKey error",
        );
    }
}

// Specificity is a pure function of which selectors are literal.
proptest! {
    #[test]
    fn test_specificity_scores(
        env in selector(),
        domain in selector(),
        path in segment(),
    ) {
        let full_key = format!("{}.{}.{}", env, domain, path);
        let entry = ConfigEntry::parse(&full_key, "value", true).unwrap();

        let mut expected = 0;
        if env != "*" {
            expected += 1;
        }
        if domain != "*" {
            expected += 10;
        }
        prop_assert_eq!(entry.specificity(), expected);
    }
}

// An entry always applies to its own literal context, and a wildcard env
// applies everywhere.
proptest! {
    #[test]
    fn test_applicable_to_own_context(
        env in segment(),
        domain in segment(),
        path in segment(),
    ) {
        let literal = ConfigEntry::parse(
            &format!("{}.{}.{}", env, domain, path), "value", true,
        ).unwrap();
        prop_assert!(literal.applicable(&env, Some(&domain)));
        prop_assert!(literal.applicable(&env, None));

        let wildcard = ConfigEntry::parse(
            &format!("*.*.{}", path), "value", true,
        ).unwrap();
        prop_assert!(wildcard.applicable(&env, Some(&domain)));
    }
}

// compare() is reflexive and antisymmetric over parsed entries.
proptest! {
    #[test]
    fn test_compare_is_consistent(
        path_a in prop::collection::vec(segment(), 1..4),
        path_b in prop::collection::vec(segment(), 1..4),
    ) {
        let a = ConfigEntry::parse(&format!("test.{}", path_a.join(".")), "a", false).unwrap();
        let b = ConfigEntry::parse(&format!("test.{}", path_b.join(".")), "b", false).unwrap();

        prop_assert_eq!(a.compare(&a), std::cmp::Ordering::Equal);
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }
}

// Inserting distinct single-segment keys flattens back in insertion order.
proptest! {
    #[test]
    fn test_map_preserves_insertion_order(
        keys in prop::collection::hash_set(segment(), 1..8),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut map = ConfigMap::new();
        for (i, key) in keys.iter().enumerate() {
            let entry = ConfigEntry::parse(
                &format!("test.{}", key), i as i64, false,
            ).unwrap();
            map.add(entry, false).unwrap();
        }

        let entries = map.entries();
        prop_assert_eq!(entries.len(), keys.len());
        for (i, entry) in entries.iter().enumerate() {
            prop_assert_eq!(&entry.key(), &keys[i]);
            prop_assert_eq!(entry.value(), &ConfigValue::Integer(i as i64));
        }
    }
}

// overwrite=false keeps whichever entry scores higher, favoring the new
// one on ties; overwrite=true always replaces.
proptest! {
    #[test]
    fn test_insert_policy_respects_specificity(
        env_a in selector(),
        env_b in selector(),
        path in segment(),
    ) {
        let a = ConfigEntry::parse(&format!("{}.{}", env_a, path), "a", false).unwrap();
        let b = ConfigEntry::parse(&format!("{}.{}", env_b, path), "b", false).unwrap();

        let mut map = ConfigMap::new();
        map.add(a.clone(), false).unwrap();
        map.add(b.clone(), false).unwrap();

        let expected = if b.specificity() >= a.specificity() { "b" } else { "a" };
        let got = map.get(&path).entry().unwrap().value().as_str().unwrap().to_string();
        prop_assert_eq!(got, expected);

        let mut map = ConfigMap::new();
        map.add(a, false).unwrap();
        map.add(b, true).unwrap();
        let got = map.get(&path).entry().unwrap().value().as_str().unwrap().to_string();
        prop_assert_eq!(got, "b");
    }
}
