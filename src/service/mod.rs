// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer tying sources, parsers, and the domain model together.

pub mod loader;
pub mod registry;

pub use loader::{Loader, LoaderBuilder};
