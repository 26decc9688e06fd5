// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config map: a prefix tree over entry key paths.
//!
//! The map stores one `ConfigEntry` per terminal slot and detects
//! structural conflicts on every insert: a slot can hold a value or child
//! configuration, never both. Duplicate keys are resolved by specificity
//! unless the caller forces an overwrite. Children preserve insertion
//! order, so flattening the map is deterministic.

use crate::domain::entry::ConfigEntry;
use crate::domain::errors::{ConfigError, Result};

/// One slot in the tree: a terminal entry or an ordered set of children.
#[derive(Clone, Debug)]
enum Node {
    Entry(ConfigEntry),
    Children(Vec<(String, Node)>),
}

/// The result of a [`ConfigMap::get`] lookup.
#[derive(Debug)]
pub enum Lookup<'a> {
    /// The key names a terminal entry.
    Entry(&'a ConfigEntry),
    /// The key names an internal node with child configuration.
    Branch,
    /// The key names nothing.
    Absent,
}

impl<'a> Lookup<'a> {
    /// Returns the terminal entry, if the lookup found one.
    pub fn entry(self) -> Option<&'a ConfigEntry> {
        match self {
            Lookup::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Returns `true` if the key named an internal node.
    pub fn is_branch(&self) -> bool {
        matches!(self, Lookup::Branch)
    }

    /// Returns `true` if the key named nothing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }
}

/// A prefix tree of config entries keyed by path segments.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::entry::ConfigEntry;
/// use scopecfg::domain::map::ConfigMap;
///
/// # fn main() -> scopecfg::domain::errors::Result<()> {
/// let mut map = ConfigMap::new();
/// map.push(ConfigEntry::parse("prod.service_one.config_one", "value_one", false)?)?;
///
/// let entry = map.get("service_one.config_one").entry().unwrap();
/// assert_eq!(entry.value().as_str(), Some("value_one"));
/// assert!(map.get("service_one").is_branch());
/// assert!(map.get("service_two").is_absent());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigMap {
    root: Vec<(String, Node)>,
}

impl ConfigMap {
    /// Creates an empty config map.
    pub fn new() -> Self {
        Self { root: Vec::new() }
    }

    /// Inserts an entry, resolving duplicate keys by specificity.
    ///
    /// At the entry's final path segment, an existing entry is replaced
    /// when `overwrite` is set or when the new entry's specificity is
    /// greater than or equal to the existing one's; a specificity tie
    /// favors the new entry. Fails with [`ConfigError::KeyConflict`] when
    /// the final segment already has child configuration, or when an
    /// intermediate segment already holds a value.
    pub fn add(&mut self, entry: ConfigEntry, overwrite: bool) -> Result<()> {
        Self::deep_add(&mut self.root, entry, 0, overwrite)
    }

    /// Inserts an entry without forcing an overwrite. Equivalent to
    /// `add(entry, false)`.
    pub fn push(&mut self, entry: ConfigEntry) -> Result<()> {
        self.add(entry, false)
    }

    fn deep_add(
        children: &mut Vec<(String, Node)>,
        entry: ConfigEntry,
        depth: usize,
        overwrite: bool,
    ) -> Result<()> {
        let segment = &entry.path()[depth];
        let last = depth + 1 == entry.path().len();
        let position = children.iter().position(|(key, _)| key == segment);

        if last {
            return match position {
                None => {
                    children.push((segment.clone(), Node::Entry(entry)));
                    Ok(())
                }
                Some(index) => match &mut children[index].1 {
                    Node::Children(_) => Err(ConfigError::key_conflict(
                        segment,
                        "already has at least one child config",
                    )),
                    Node::Entry(existing) => {
                        if overwrite || entry.specificity() >= existing.specificity() {
                            children[index].1 = Node::Entry(entry);
                        }
                        Ok(())
                    }
                },
            };
        }

        let index = match position {
            Some(index) => index,
            None => {
                children.push((segment.clone(), Node::Children(Vec::new())));
                children.len() - 1
            }
        };
        match &mut children[index].1 {
            Node::Entry(_) => Err(ConfigError::key_conflict(
                segment,
                "already has a value assigned",
            )),
            Node::Children(next) => Self::deep_add(next, entry, depth + 1, overwrite),
        }
    }

    /// Looks up a dotted key, returning the terminal entry, a branch
    /// marker, or absence. A key that descends through a terminal, or
    /// whose first missing segment is anywhere along the path, is absent.
    pub fn get(&self, key: &str) -> Lookup<'_> {
        let mut children = &self.root;
        let mut segments = key.split('.').peekable();

        while let Some(segment) = segments.next() {
            let node = match children.iter().find(|(k, _)| k == segment) {
                Some((_, node)) => node,
                None => return Lookup::Absent,
            };
            if segments.peek().is_none() {
                return match node {
                    Node::Entry(entry) => Lookup::Entry(entry),
                    Node::Children(_) => Lookup::Branch,
                };
            }
            match node {
                Node::Children(next) => children = next,
                // The key descends below a terminal value.
                Node::Entry(_) => return Lookup::Absent,
            }
        }
        Lookup::Absent
    }

    /// Flattens the map into its terminal entries, pre-order depth-first
    /// in insertion order.
    pub fn entries(&self) -> Vec<&ConfigEntry> {
        let mut out = Vec::new();
        Self::collect(&self.root, &mut out);
        out
    }

    fn collect<'a>(children: &'a [(String, Node)], out: &mut Vec<&'a ConfigEntry>) {
        for (_, node) in children {
            match node {
                Node::Entry(entry) => out.push(entry),
                Node::Children(next) => Self::collect(next, out),
            }
        }
    }

    /// Merges another map into this one. Every entry of `other`
    /// unconditionally replaces whatever is at its key, but structural
    /// conflicts between the two trees still fail with
    /// [`ConfigError::KeyConflict`].
    pub fn merge(&mut self, other: &ConfigMap) -> Result<()> {
        for entry in other.entries() {
            self.add(entry.clone(), true)?;
        }
        Ok(())
    }

    /// The number of terminal entries in the map.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
