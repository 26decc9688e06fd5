// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide config registry.
//!
//! An application typically loads its configuration once at startup and
//! then reads it from anywhere. [`bind`] publishes a resolved
//! [`ConfigView`] under a name; [`get`] fetches it for the rest of the
//! process lifetime. Binding is write-once per process: rebinding under
//! the same name is a no-op, a different name is rejected.

use crate::domain::{ConfigError, ConfigView, Result};

use once_cell::sync::OnceCell;

struct Registration {
    name: String,
    view: ConfigView,
}

static REGISTRY: OnceCell<Registration> = OnceCell::new();

/// Publishes `view` as the process-wide configuration under `name`.
///
/// Idempotent for the same name. Returns
/// [`ConfigError::AlreadyBound`] if a view is already bound under a
/// different name.
pub fn bind(name: impl Into<String>, view: ConfigView) -> Result<()> {
    let name = name.into();
    let requested = name.clone();
    match REGISTRY.set(Registration { name, view }) {
        Ok(()) => Ok(()),
        Err(_) => {
            // set() only fails when a registration already exists.
            let existing = match REGISTRY.get() {
                Some(reg) => reg.name.clone(),
                None => return Err(ConfigError::AlreadyBound {
                    existing: String::new(),
                    requested,
                }),
            };
            if existing == requested {
                tracing::debug!(name = %requested, "config already bound, ignoring rebind");
                Ok(())
            } else {
                Err(ConfigError::AlreadyBound {
                    existing,
                    requested,
                })
            }
        }
    }
}

/// Returns the bound config view, if any.
pub fn get() -> Option<&'static ConfigView> {
    REGISTRY.get().map(|reg| &reg.view)
}

/// Returns the name the config view was bound under, if any.
pub fn bound_name() -> Option<&'static str> {
    REGISTRY.get().map(|reg| reg.name.as_str())
}

/// Whether a config view has been bound in this process.
pub fn is_bound() -> bool {
    REGISTRY.get().is_some()
}
