//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("QCEW_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name for a recorded body; path separators in `key` become underscores.
pub(crate) fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    let key = key.replace(['/', '\\'], "_");
    format!("{endpoint}_{key}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &[u8],
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(fixture_name(endpoint, key, ext));
    fs::write(&path, body)?;

    if env::var("QCEW_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("QCEW_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
