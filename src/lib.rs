// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered, environment- and domain-scoped application configuration.
//!
//! This crate resolves configuration declared as flat dotted keys of the
//! form `env.domain.path...` into a scoped, queryable view. Declarations
//! for other environments or domains are filtered out, and among the
//! remaining candidates for a key the most specific declaration wins
//! (a literal domain outweighs a literal environment, which outweighs a
//! `*` wildcard).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and resolution logic (`ConfigEntry`,
//!   `ConfigMap`, `ConfigView`, errors)
//! - **Ports**: Trait definitions that define interfaces
//!   (`DocumentSource`, `ConfigParser`)
//! - **Adapters**: Implementations for specific document sources and
//!   formats (files, in-memory strings, YAML)
//! - **Service**: The loader that orchestrates everything, plus a
//!   process-wide registry
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document parsing (default)
//!
//! # Quick Start
//!
//! ```rust
//! use scopecfg::prelude::*;
//!
//! # fn main() -> scopecfg::domain::Result<()> {
//! let config = Loader::builder()
//!     .environment("test")
//!     .with_string(
//!         "base",
//!         r#"
//! "test.service_one.config_one": value_one
//! "prod.service_one.config_one": other_value
//! "#,
//!     )
//!     .build()?
//!     .load()?;
//!
//! assert_eq!(
//!     config.value("service_one.config_one").unwrap().as_str(),
//!     Some("value_one")
//! );
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigEntry, ConfigError, ConfigMap, ConfigReading, ConfigValue, ConfigView, Result,
    };
    pub use crate::ports::{ConfigParser, DocumentSource};
    pub use crate::service::{Loader, LoaderBuilder};

    pub use crate::adapters::{FileSource, StringSource};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
