// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core resolution types: the entry model, the
//! config value sum type, the config map trie, the read-only view, and the
//! error types. It is independent of any document format or I/O concern.

pub mod entry;
pub mod errors;
pub mod map;
pub mod value;
pub mod view;

// Re-export commonly used types
pub use entry::{ConfigEntry, Selector};
pub use errors::{ConfigError, Result};
pub use map::{ConfigMap, Lookup};
pub use value::ConfigValue;
pub use view::{ConfigReading, ConfigView};
