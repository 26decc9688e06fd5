// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the port for turning raw
//! document content into a flat, ordered list of config entries.

use crate::domain::{ConfigEntry, Result};

/// A parser from document content to config entries.
///
/// Parsers flatten nested structure depth-first in declared key order,
/// joining level keys with `.` to form each entry's full key, and fail
/// with an `InvalidKey` error when a full key is malformed for the active
/// domain mode.
///
/// # Examples
///
/// ```rust
/// use scopecfg::ports::ConfigParser;
/// use scopecfg::domain::{ConfigEntry, Result};
///
/// struct SingleEntry;
///
/// impl ConfigParser for SingleEntry {
///     fn parse(&self, _content: &str) -> Result<Vec<ConfigEntry>> {
///         Ok(vec![ConfigEntry::parse("prod.key", "value", false)?])
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses document content into an ordered list of config entries.
    ///
    /// The returned list preserves the document's declared key order
    /// (pre-order, depth-first).
    fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>>;

    /// The file extensions this parser handles, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str) -> Result<Vec<ConfigEntry>> {
            Ok(vec![
                ConfigEntry::parse("prod.service_one", "value_one", false)?,
                ConfigEntry::parse("prod.service_two", "value_two", false)?,
            ])
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test"]
        }
    }

    #[test]
    fn test_parser_returns_ordered_entries() {
        let parser = TestParser;
        let entries = parser.parse("dummy").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key(), "service_one");
        assert_eq!(entries[1].key(), "service_two");
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = TestParser;
        assert_eq!(parser.supported_extensions(), &["test"]);
    }
}
