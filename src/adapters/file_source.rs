// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed document source adapter.
//!
//! This adapter reads one configuration document from a file path. A
//! missing file is reported as an absent document rather than an error,
//! which is what makes an optional local-override file possible.

use crate::domain::{ConfigError, Result};
use crate::ports::DocumentSource;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration document (10MB).
/// This prevents denial of service via extremely large files.
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A document source backed by a single file.
///
/// The source name is the path as given, so error wrappers point the
/// caller at the offending file.
///
/// # Examples
///
/// ```rust,no_run
/// use scopecfg::adapters::FileSource;
/// use scopecfg::ports::DocumentSource;
///
/// let source = FileSource::new("/etc/myapp/app_config.yml");
/// let content = source.read().unwrap();   // None if the file is missing
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.to_string_lossy().into_owned(),
            path,
        }
    }

    /// Creates a source for a file in the OS-appropriate configuration
    /// directory, determined via the `directories` crate.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `filename` - The configuration file name (e.g., "app_config.yml")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use scopecfg::adapters::FileSource;
    ///
    /// let source = FileSource::from_default_location("myapp", "com.example", "app_config.yml")
    ///     .unwrap();
    /// ```
    pub fn from_default_location(
        app_name: &str,
        qualifier: &str,
        filename: &str,
    ) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::ParseError {
                message: "failed to determine project directories".to_string(),
                source: None,
            })?;
        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::IoError(e)),
        };

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::ParseError {
                message: format!(
                    "configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                source: None,
            });
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::IoError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "prod.key: value").unwrap();
        temp_file.flush().unwrap();

        let source = FileSource::new(temp_file.path());
        let content = source.read().unwrap().unwrap();
        assert_eq!(content, "prod.key: value\n");
    }

    #[test]
    fn test_missing_file_is_absent() {
        let source = FileSource::new("/nonexistent/path/to/app_config.yml");
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn test_name_is_the_path() {
        let source = FileSource::new("/tmp/app_config.yml");
        assert_eq!(source.name(), "/tmp/app_config.yml");
        assert_eq!(source.path(), Path::new("/tmp/app_config.yml"));
    }
}
