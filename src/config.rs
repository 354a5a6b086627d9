//! Run context and input locations.
//!
//! Nothing here is read from a config file: the fetched fields are fixed.
//! The config directory is only created so later versions have a place to
//! look.

use crate::error::PuppyfetchError;
use log::debug;
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

const TOOL_NAME: &str = "puppyfetch";

/// Explicit state shared by a single run: who we are for diagnostics and
/// where our config directory lives.
#[derive(Debug, Clone)]
pub struct RunContext {
    program: String,
    config_dir: Option<PathBuf>,
}

impl RunContext {
    pub fn new(program: impl Into<String>, config_dir: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            config_dir,
        }
    }

    /// Context for the current process: `argv[0]` and `$HOME/.config/puppyfetch`.
    pub fn from_env() -> Self {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| TOOL_NAME.to_string());
        let config_dir = dirs::home_dir().map(|home| home.join(".config").join(TOOL_NAME));
        Self::new(program, config_dir)
    }

    /// Name used as the prefix of fatal diagnostics.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Fatal error line, prefixed with the program name.
    pub fn diagnostic(&self, err: &PuppyfetchError) -> String {
        format!("{}: {}", self.program(), err)
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Create the config directory if it is missing. Failure is not reported
    /// to the user.
    pub fn ensure_config_dir(&self) {
        let Some(dir) = self.config_dir() else {
            debug!("no home directory, config directory not created");
            return;
        };
        if dir.exists() {
            return;
        }
        match DirBuilder::new().recursive(true).mode(0o700).create(dir) {
            Ok(()) => debug!("created config directory {}", dir.display()),
            Err(err) => debug!("could not create {}: {}", dir.display(), err),
        }
    }
}

/// Every text source the extractors read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub cpuinfo: PathBuf,
    pub cpu_max_freq: PathBuf,
    pub meminfo: PathBuf,
    pub os_release: PathBuf,
    pub hostname: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            cpuinfo: PathBuf::from("/proc/cpuinfo"),
            cpu_max_freq: PathBuf::from("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq"),
            meminfo: PathBuf::from("/proc/meminfo"),
            os_release: PathBuf::from("/etc/os-release"),
            hostname: PathBuf::from("/proc/sys/kernel/hostname"),
        }
    }
}
