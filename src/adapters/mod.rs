// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document source and parser implementations.
//!
//! This module contains the concrete implementations of the ports: the
//! YAML flattening parser and the document sources the loader reads from.

pub mod file_source;
pub mod string_source;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters
pub use file_source::FileSource;
pub use string_source::StringSource;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
