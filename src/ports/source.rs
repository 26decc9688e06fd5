// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! This module defines the `DocumentSource` trait, the port through which
//! the loader obtains raw configuration documents. Enumerating the
//! filesystem (globs, directory walks) happens outside this crate; a
//! source hands over one document, or reports that it is absent.

use crate::domain::Result;

/// A provider of one raw configuration document.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a loader can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use scopecfg::ports::DocumentSource;
/// use scopecfg::domain::Result;
///
/// struct Fixed;
///
/// impl DocumentSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self) -> Result<Option<String>> {
///         Ok(Some("prod.key: value".to_string()))
///     }
/// }
/// ```
pub trait DocumentSource: Send + Sync {
    /// A stable identifier for this source.
    ///
    /// The name appears in error wrappers so a caller can tell which input
    /// was malformed, and primary sources are processed in lexicographic
    /// name order to keep resolution deterministic.
    fn name(&self) -> &str;

    /// Reads the document content.
    ///
    /// Returns `Ok(Some(content))` when the document exists, `Ok(None)`
    /// when it is absent (an absent document is not an error; the loader
    /// skips it), or `Err` when reading failed.
    fn read(&self) -> Result<Option<String>>;
}
