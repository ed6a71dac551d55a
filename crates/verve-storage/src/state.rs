//! Generic JSON record helpers.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StorageError;

/// Read a JSON record from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let bytes = fs::read(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: path.display().to_string(),
            }
        } else {
            StorageError::Io(err)
        }
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write a JSON record to `path`.
///
/// Writes to a temp file then renames over the target so a crash
/// mid-write never leaves a truncated record behind.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "record written");
    Ok(())
}
