// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while parsing config
//! keys, building the config map, or loading documents from sources. All
//! errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when parsing,
/// resolving, or registering configuration. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use scopecfg::domain::errors::ConfigError;
///
/// fn read_key() -> Result<String, ConfigError> {
///     Err(ConfigError::invalid_key("prod", "must have an env component"))
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A full config key is malformed: too few components for the active
    /// mode, an empty or non-string component, or a wildcard outside the
    /// env/domain positions.
    #[error("invalid config key '{key}': {reason}")]
    InvalidKey {
        /// The offending full key
        key: String,
        /// Why the key was rejected
        reason: String,
    },

    /// A config map insertion found a path segment that is expected to be
    /// both a terminal value and a parent of children.
    #[error("key conflict: '{segment}' {reason}")]
    KeyConflict {
        /// The path segment where the conflict was detected
        segment: String,
        /// Which side of the structural invariant was violated
        reason: String,
    },

    /// An error raised while processing a specific document source,
    /// carrying that source's identifier.
    #[error("config error in source '{source_name}': {source}")]
    InvalidConfigFile {
        /// The identifier of the source that produced the error
        source_name: String,
        /// The underlying error
        #[source]
        source: Box<ConfigError>,
    },

    /// Failed to parse a configuration document.
    #[error("failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The loader was built without an environment selector.
    #[error("environment is not set or empty")]
    MissingEnvironment,

    /// The loader was built without a parser and the `yaml` feature is
    /// disabled, so no default parser is available.
    #[error("no parser configured and the 'yaml' feature is disabled")]
    MissingParser,

    /// The process-wide registry is already bound under a different name.
    #[error("app config already bound as '{existing}' (requested '{requested}')")]
    AlreadyBound {
        /// The name the registry is currently bound under
        existing: String,
        /// The conflicting name that was requested
        requested: String,
    },

    /// An I/O error occurred while reading a document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an `InvalidKey` error for the given full key.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `KeyConflict` error for the given path segment.
    pub fn key_conflict(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::KeyConflict {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an error with the identifier of the source it came from.
    pub fn in_source(source_name: impl Into<String>, source: ConfigError) -> Self {
        ConfigError::InvalidConfigFile {
            source_name: source_name.into(),
            source: Box::new(source),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
