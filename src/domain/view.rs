// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only indifferent-access view over a resolved config map.
//!
//! A `ConfigView` wraps a resolved [`ConfigMap`] behind an `Arc` and offers
//! dotted-key lookup that returns either a terminal value or a narrower
//! view scoped to the looked-up prefix. Views are cheap to clone and never
//! mutate the underlying map, so a resolved config can be shared freely.

use crate::domain::entry::ConfigEntry;
use crate::domain::map::{ConfigMap, Lookup};
use crate::domain::value::ConfigValue;
use std::sync::Arc;

/// What a [`ConfigView::get`] lookup produced.
#[derive(Clone, Debug)]
pub enum ConfigReading {
    /// The key named a terminal value.
    Value(ConfigValue),
    /// The key named a subtree; the reading is a view scoped to it.
    Scope(ConfigView),
}

impl ConfigReading {
    /// Returns the value, if the reading is a terminal one.
    pub fn into_value(self) -> Option<ConfigValue> {
        match self {
            ConfigReading::Value(value) => Some(value),
            ConfigReading::Scope(_) => None,
        }
    }

    /// Returns the scoped view, if the reading is a subtree.
    pub fn into_scope(self) -> Option<ConfigView> {
        match self {
            ConfigReading::Scope(view) => Some(view),
            ConfigReading::Value(_) => None,
        }
    }
}

/// An immutable, lazily-scoped view over a resolved config map.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::entry::ConfigEntry;
/// use scopecfg::domain::map::ConfigMap;
/// use scopecfg::domain::view::ConfigView;
///
/// # fn main() -> scopecfg::domain::errors::Result<()> {
/// let mut map = ConfigMap::new();
/// map.push(ConfigEntry::parse("prod.service_one.config_one", "value_one", false)?)?;
///
/// let cfg = ConfigView::new(map);
/// let value = cfg.value("service_one.config_one").unwrap();
/// assert_eq!(value.as_str(), Some("value_one"));
///
/// // Chained narrowing through a scoped view.
/// let scoped = cfg.scope("service_one").unwrap();
/// assert_eq!(scoped.value("config_one").unwrap().as_str(), Some("value_one"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfigView {
    map: Arc<ConfigMap>,
    prefix: Option<String>,
}

impl ConfigView {
    /// Wraps a resolved config map in an unscoped view.
    pub fn new(map: ConfigMap) -> Self {
        Self {
            map: Arc::new(map),
            prefix: None,
        }
    }

    fn scoped(map: Arc<ConfigMap>, prefix: String) -> Self {
        Self {
            map,
            prefix: Some(prefix),
        }
    }

    /// Looks up a dotted key relative to this view's scope.
    ///
    /// Returns a terminal value, a narrower view when the key names a
    /// subtree, or `None` when the key names nothing.
    pub fn get(&self, key: &str) -> Option<ConfigReading> {
        let target = match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        };
        match self.map.get(&target) {
            Lookup::Entry(entry) => Some(ConfigReading::Value(entry.value().clone())),
            Lookup::Branch => Some(ConfigReading::Scope(Self::scoped(
                Arc::clone(&self.map),
                target,
            ))),
            Lookup::Absent => None,
        }
    }

    /// Looks up a key and returns its terminal value, or `None` when the
    /// key is absent or names a subtree.
    pub fn value(&self, key: &str) -> Option<ConfigValue> {
        self.get(key).and_then(ConfigReading::into_value)
    }

    /// Looks up a key and returns a view scoped to it, or `None` when the
    /// key is absent or names a terminal value.
    pub fn scope(&self, key: &str) -> Option<ConfigView> {
        self.get(key).and_then(ConfigReading::into_scope)
    }

    /// The scope prefix of this view, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Enumerates all terminal entries of the underlying map, ignoring the
    /// view's own scope prefix.
    pub fn entries(&self) -> Vec<&ConfigEntry> {
        self.map.entries()
    }
}
