// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, a closed sum over the value
//! shapes a configuration document can carry. The resolution engine treats
//! values as opaque payloads; consumers pattern-match or use the accessor
//! methods at the point of use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value.
///
/// Values are scalars, ordered sequences, or ordered string-keyed mappings.
/// Mappings only appear *inside* terminal values (e.g. within a sequence);
/// a mapping at a document level is flattened into entries by the parser
/// instead.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::value::ConfigValue;
///
/// let value = ConfigValue::from("localhost");
/// assert_eq!(value.as_str(), Some("localhost"));
///
/// let value = ConfigValue::from(5432);
/// assert_eq!(value.as_i64(), Some(5432));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<ConfigValue>),
    /// An ordered string-keyed mapping, preserving declared key order.
    Mapping(Vec<(String, ConfigValue)>),
}

impl ConfigValue {
    /// Returns the string content if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer content if this value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric content as a float. Integers widen losslessly
    /// for the magnitudes configuration files carry.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the elements if this value is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the key/value pairs if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, ConfigValue)]> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(seq) => {
                write!(f, "[")?;
                for (i, v) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(feature = "yaml")]
mod yaml_conversion {
    use super::ConfigValue;
    use crate::domain::errors::{ConfigError, Result};

    impl TryFrom<serde_yaml::Value> for ConfigValue {
        type Error = ConfigError;

        /// Converts a parsed YAML value into a `ConfigValue`.
        ///
        /// Tagged values are unwrapped to their inner value. A mapping key
        /// that is not a string fails with an `InvalidKey` error.
        fn try_from(value: serde_yaml::Value) -> Result<Self> {
            match value {
                serde_yaml::Value::Null => Ok(ConfigValue::Null),
                serde_yaml::Value::Bool(b) => Ok(ConfigValue::Bool(b)),
                serde_yaml::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Ok(ConfigValue::Integer(i))
                    } else {
                        // u64 overflow or a true float
                        Ok(ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)))
                    }
                }
                serde_yaml::Value::String(s) => Ok(ConfigValue::String(s)),
                serde_yaml::Value::Sequence(seq) => {
                    let mut out = Vec::with_capacity(seq.len());
                    for item in seq {
                        out.push(ConfigValue::try_from(item)?);
                    }
                    Ok(ConfigValue::Sequence(out))
                }
                serde_yaml::Value::Mapping(map) => {
                    let mut out = Vec::with_capacity(map.len());
                    for (key, val) in map {
                        let key = key.as_str().ok_or_else(|| {
                            ConfigError::invalid_key(
                                "<mapping>",
                                "config key component must be a string",
                            )
                        })?;
                        out.push((key.to_string(), ConfigValue::try_from(val)?));
                    }
                    Ok(ConfigValue::Mapping(out))
                }
                serde_yaml::Value::Tagged(tagged) => ConfigValue::try_from(tagged.value),
            }
        }
    }
}
