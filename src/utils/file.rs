//! File reading utilities

use crate::error::{PuppyfetchError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(PuppyfetchError::from)
}

/// Read a source that is allowed to be missing.
///
/// An unreadable file is not an error for the fetch: the caller leaves its
/// summary empty and the row is skipped later.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            debug!("skipping {}: {}", path.display(), err);
            None
        }
    }
}

/// Read first line of a file, trimmed.
/// Meant for single-value files like /proc/sys/kernel/hostname
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = read_file_safe(path)?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}
