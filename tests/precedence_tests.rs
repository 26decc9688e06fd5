// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for specificity-based precedence between config declarations.
//!
//! When several applicable declarations target the same key, the one with
//! the most literal selectors wins regardless of declaration order. A
//! literal domain outweighs a literal environment.

mod common;

use scopecfg::domain::{ConfigEntry, ConfigMap, ConfigValue, ConfigView};
use scopecfg::service::Loader;

fn resolve(yaml: &str, environment: &str, domain: &str) -> ConfigView {
    Loader::builder()
        .environment(environment)
        .domain(domain)
        .use_domain(true)
        .with_string("base", yaml)
        .build()
        .unwrap()
        .load()
        .unwrap()
}

#[test]
fn test_literal_env_beats_wildcard_env() {
    let yaml = r#"
"*.service.key": generic
"test.service.key": specific
"#;
    let config = Loader::builder()
        .environment("test")
        .with_string("base", yaml)
        .build()
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(config.value("service.key").unwrap().as_str(), Some("specific"));
}

#[test]
fn test_wildcard_declared_later_does_not_displace_literal() {
    let yaml = r#"
"test.service.key": specific
"*.service.key": generic
"#;
    let config = Loader::builder()
        .environment("test")
        .with_string("base", yaml)
        .build()
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(config.value("service.key").unwrap().as_str(), Some("specific"));
}

#[test]
fn test_specificity_ladder_in_domain_mode() {
    // All four declarations apply to env=test, domain=hk. Literal domain
    // contributes more than literal environment, so the fully literal
    // declaration wins and "*.hk" beats "test.*".
    let yaml = r#"
"*.*.service.key": score_zero
"test.*.service.key": score_one
"*.hk.service.key": score_ten
"test.hk.service.key": score_eleven
"#;
    assert_eq!(
        resolve(yaml, "test", "hk").value("service.key").unwrap().as_str(),
        Some("score_eleven")
    );

    let yaml = r#"
"test.*.service.key": score_one
"*.hk.service.key": score_ten
"#;
    assert_eq!(
        resolve(yaml, "test", "hk").value("service.key").unwrap().as_str(),
        Some("score_ten")
    );
}

#[test]
fn test_equal_specificity_later_declaration_wins() {
    // YAML rejects duplicate keys, so equal-specificity collisions are
    // exercised through the map directly.
    let mut map = ConfigMap::new();
    map.add(
        ConfigEntry::parse("test.service.key", "first", false).unwrap(),
        false,
    )
    .unwrap();
    map.add(
        ConfigEntry::parse("test.service.key", "second", false).unwrap(),
        false,
    )
    .unwrap();

    let view = ConfigView::new(map);
    assert_eq!(view.value("service.key").unwrap().as_str(), Some("second"));
}

#[test]
fn test_inapplicable_literal_does_not_mask_wildcard() {
    let yaml = r#"
"prod.hk.service.key": prod_value
"*.*.service.key": fallback
"#;
    assert_eq!(
        resolve(yaml, "test", "hk").value("service.key").unwrap().as_str(),
        Some("fallback")
    );
}

#[test]
fn test_unset_domain_skips_domain_check() {
    // Without an active domain, the domain selector is never consulted,
    // so the literal-domain declaration still applies and outscores the
    // wildcard.
    let yaml = r#"
"test.hk.service.key": hk_value
"test.*.service.key": any_value
"#;
    let config = Loader::builder()
        .environment("test")
        .use_domain(true)
        .with_string("base", yaml)
        .build()
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(config.value("service.key").unwrap().as_str(), Some("hk_value"));
}

#[test]
fn test_precedence_is_per_key() {
    let yaml = r#"
"test.hk.a": literal_a
"*.*.a": generic_a
"*.*.b": generic_b
"#;
    let config = resolve(yaml, "test", "hk");
    assert_eq!(config.value("a").unwrap().as_str(), Some("literal_a"));
    assert_eq!(config.value("b").unwrap().as_str(), Some("generic_b"));
}

#[test]
fn test_values_survive_precedence_resolution() {
    let yaml = r#"
"*.timeouts.connect": 5
"test.timeouts.connect": 30
"#;
    let config = Loader::builder()
        .environment("test")
        .with_string("base", yaml)
        .build()
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(
        config.value("timeouts.connect"),
        Some(ConfigValue::Integer(30))
    );
}
