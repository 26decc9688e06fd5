// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML flattening parser adapter.
//!
//! This module provides the parser that turns a nested YAML document into
//! an ordered list of config entries. Nesting is flattened depth-first in
//! declared key order; level keys are joined with `.`, and since a YAML
//! key may itself contain dots, `"test.hk": {a: 1}` and `test: {hk: {a: 1}}`
//! produce the same entry.

use crate::domain::{ConfigEntry, ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;

/// The YAML flattening parser.
///
/// # Examples
///
/// ```
/// use scopecfg::adapters::YamlParser;
/// use scopecfg::ports::ConfigParser;
///
/// let parser = YamlParser::new(false);
/// let entries = parser
///     .parse("\"test.hk.service_one.config_one\": value_one")
///     .unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key(), "hk.service_one.config_one");
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser {
    use_domain: bool,
}

impl YamlParser {
    /// Creates a parser. When `use_domain` is set, full keys require a
    /// domain component after the env.
    pub fn new(use_domain: bool) -> Self {
        Self { use_domain }
    }

    fn flatten(
        &self,
        map: &serde_yaml::Mapping,
        prefix: Option<&str>,
        out: &mut Vec<ConfigEntry>,
    ) -> Result<()> {
        for (key, value) in map {
            let key = key.as_str().ok_or_else(|| {
                ConfigError::invalid_key(
                    prefix.unwrap_or("<root>"),
                    "config key component must be a string",
                )
            })?;
            let full_key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key.to_string(),
            };
            match value {
                serde_yaml::Value::Mapping(nested) => {
                    self.flatten(nested, Some(&full_key), out)?;
                }
                other => {
                    let value = ConfigValue::try_from(other.clone())?;
                    out.push(ConfigEntry::parse(&full_key, value, self.use_domain)?);
                }
            }
        }
        Ok(())
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match document {
            // An empty document carries no configuration.
            serde_yaml::Value::Null => Ok(Vec::new()),
            serde_yaml::Value::Mapping(map) => {
                let mut entries = Vec::new();
                self.flatten(&map, None, &mut entries)?;
                Ok(entries)
            }
            _ => Err(ConfigError::ParseError {
                message: "top-level document must be a mapping".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
