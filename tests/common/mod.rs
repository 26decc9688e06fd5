// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration test suite.

use std::io::Write;
use std::sync::Once;

use tempfile::NamedTempFile;

static INIT_TRACING: Once = Once::new();

/// Initializes a tracing subscriber once per test binary so loader
/// diagnostics surface in test output.
#[allow(dead_code)]
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Writes `content` to a fresh temp file and returns the handle. The file
/// lives as long as the returned value.
#[allow(dead_code)]
pub fn yaml_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
