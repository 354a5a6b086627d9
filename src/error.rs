//! Centralized error handling for puppyfetch

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when `/etc/os-release` cannot be trusted.
pub const EXIT_OS_BROKEN_STREAM: i32 = 25;

/// Custom error type for puppyfetch operations
#[derive(Debug, Error)]
pub enum PuppyfetchError {
    /// I/O errors (file reading, writing the rendered output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The bounded `PRETTY_NAME` scan ran out of lines
    #[error("{} read failed: no PRETTY_NAME within {limit} lines", .path.display())]
    OsReleaseExhausted { path: PathBuf, limit: usize },
    /// The extracted pretty name failed its post-scan check
    #[error("unexpected os-release value: {0}")]
    OsReleaseIntegrity(String),
    /// `uname(2)` failed, carries errno
    #[error("uname() failed with errno {0}")]
    Uname(i32),
}

impl PuppyfetchError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PuppyfetchError::OsReleaseExhausted { .. } | PuppyfetchError::OsReleaseIntegrity(_) => {
                EXIT_OS_BROKEN_STREAM
            }
            PuppyfetchError::Uname(_) | PuppyfetchError::Io(_) => 1,
        }
    }
}

/// Type alias for Results in puppyfetch
pub type Result<T> = std::result::Result<T, PuppyfetchError>;
