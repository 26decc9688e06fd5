// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config entry model.
//!
//! A `ConfigEntry` is one fully qualified configuration fact: an environment
//! selector, an optional domain selector, a key path, and a value. Entries
//! are constructed from a dotted full key and are immutable thereafter.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The wildcard token accepted in the env and domain components of a key.
pub const WILDCARD: &str = "*";

/// An environment or domain selector.
///
/// `Any` is the wildcard (`*`) and matches every target; a literal only
/// matches an equal target. In the entry total order, `Any` sorts before
/// any literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// Matches any target (`*` in a full key).
    Any,
    /// Matches only an equal target.
    Literal(String),
}

impl Selector {
    fn parse(component: &str) -> Self {
        if component == WILDCARD {
            Selector::Any
        } else {
            Selector::Literal(component.to_string())
        }
    }

    /// Returns `true` if this selector matches the given target.
    pub fn matches(&self, target: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Literal(s) => s == target,
        }
    }

    /// Returns `true` if this selector is the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl Ord for Selector {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Selector::Any, Selector::Any) => Ordering::Equal,
            (Selector::Any, Selector::Literal(_)) => Ordering::Less,
            (Selector::Literal(_), Selector::Any) => Ordering::Greater,
            (Selector::Literal(a), Selector::Literal(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Selector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => write!(f, "{}", WILDCARD),
            Selector::Literal(s) => write!(f, "{}", s),
        }
    }
}

/// One resolved configuration fact.
///
/// A full key has the shape `env.key...` or, with domain mode enabled,
/// `env.domain.key...`. The env and domain components may be the wildcard
/// `*`; a wildcard in any other position is rejected.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::entry::ConfigEntry;
///
/// let entry = ConfigEntry::parse("prod.service_one.config_one", "value_one", false).unwrap();
/// assert_eq!(entry.key(), "service_one.config_one");
/// assert_eq!(entry.specificity(), 1);
/// assert!(entry.applicable("prod", None));
/// assert!(!entry.applicable("test", None));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    env: Selector,
    domain: Selector,
    path: Vec<String>,
    value: ConfigValue,
}

impl ConfigEntry {
    /// Parses a dotted full key into a config entry with the given value.
    ///
    /// Requires at least two components (env plus one path segment), or
    /// three when `use_domain` is enabled. With `use_domain` disabled the
    /// domain is fixed to the wildcard and ignored.
    pub fn parse(
        full_key: &str,
        value: impl Into<ConfigValue>,
        use_domain: bool,
    ) -> Result<Self> {
        let components: Vec<&str> = full_key.split('.').collect();

        if components.len() < 2 {
            return Err(ConfigError::invalid_key(
                full_key,
                "must have an env component",
            ));
        }
        if use_domain && components.len() < 3 {
            return Err(ConfigError::invalid_key(
                full_key,
                "must have a domain component when domain mode is enabled",
            ));
        }
        if components.iter().any(|c| c.is_empty()) {
            return Err(ConfigError::invalid_key(
                full_key,
                "key components must not be empty",
            ));
        }

        let env = Selector::parse(components[0]);
        let (domain, rest) = if use_domain {
            (Selector::parse(components[1]), &components[2..])
        } else {
            (Selector::Any, &components[1..])
        };

        let mut path = Vec::with_capacity(rest.len());
        for component in rest {
            if *component == WILDCARD {
                return Err(ConfigError::invalid_key(
                    full_key,
                    "wildcard is only allowed in the env and domain components",
                ));
            }
            path.push((*component).to_string());
        }

        Ok(Self {
            env,
            domain,
            path,
            value: value.into(),
        })
    }

    /// The environment selector.
    pub fn env(&self) -> &Selector {
        &self.env
    }

    /// The domain selector. Always `Any` when the entry was parsed without
    /// domain mode.
    pub fn domain(&self) -> &Selector {
        &self.domain
    }

    /// The key path without the env and domain components.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The entry value.
    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    /// Consumes the entry and returns its value.
    pub fn into_value(self) -> ConfigValue {
        self.value
    }

    /// The config key without the env and domain components, joined with `.`.
    pub fn key(&self) -> String {
        self.path.join(".")
    }

    /// The full key including env and domain, rendering wildcards as `*`.
    ///
    /// The domain component is only included when the entry carries a
    /// literal domain (entries parsed without domain mode render as
    /// `env.key...`).
    pub fn full_key(&self) -> String {
        match &self.domain {
            Selector::Literal(_) => format!("{}.{}.{}", self.env, self.domain, self.key()),
            Selector::Any => format!("{}.{}", self.env, self.key()),
        }
    }

    /// The specificity score: 1 for a literal env, plus 10 for a literal
    /// domain. A domain match outweighs an env match.
    pub fn specificity(&self) -> u32 {
        let mut score = 0;
        if !self.env.is_any() {
            score += 1;
        }
        if !self.domain.is_any() {
            score += 10;
        }
        score
    }

    /// Returns `true` if this entry applies to the given resolution
    /// context. The env must match; the domain is only checked when a
    /// target domain is supplied.
    pub fn applicable(&self, target_env: &str, target_domain: Option<&str>) -> bool {
        if !self.env.matches(target_env) {
            return false;
        }
        match target_domain {
            Some(domain) => self.domain.matches(domain),
            None => true,
        }
    }

    /// Total order over entries, independent of their values: path length,
    /// then path components lexicographically, then specificity, then env,
    /// then domain (wildcards sort before literals).
    ///
    /// Used for deterministic output and testing; merge policy never
    /// consults this ordering. Note that two entries may compare `Equal`
    /// here while differing by value, so this is deliberately not an `Ord`
    /// impl.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.path
            .len()
            .cmp(&other.path.len())
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.specificity().cmp(&other.specificity()))
            .then_with(|| self.env.cmp(&other.env))
            .then_with(|| self.domain.cmp(&other.domain))
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.full_key(), self.value)
    }
}
