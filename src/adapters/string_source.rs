// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory document source adapter.

use crate::domain::Result;
use crate::ports::DocumentSource;

/// A named, in-memory configuration document.
///
/// Useful for embedders that assemble documents themselves and for tests.
///
/// # Examples
///
/// ```
/// use scopecfg::adapters::StringSource;
/// use scopecfg::ports::DocumentSource;
///
/// let source = StringSource::new("inline", "prod.key: value");
/// assert_eq!(source.name(), "inline");
/// assert_eq!(source.read().unwrap().unwrap(), "prod.key: value");
/// ```
#[derive(Debug, Clone)]
pub struct StringSource {
    name: String,
    content: String,
}

impl StringSource {
    /// Creates a source holding the given content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl DocumentSource for StringSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(Some(self.content.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_source_read() {
        let source = StringSource::new("fixture", "prod.key: value");
        assert_eq!(source.name(), "fixture");
        assert_eq!(source.read().unwrap().unwrap(), "prod.key: value");
    }

    #[test]
    fn test_string_source_empty_content() {
        let source = StringSource::new("empty", "");
        assert_eq!(source.read().unwrap().unwrap(), "");
    }
}
