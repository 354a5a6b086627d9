//! puppyfetch library
//!
//! A tiny system information fetch: a handful of host facts printed beside
//! a puppy.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod rows;
pub mod utils;

pub use config::{RunContext, SourcePaths};
pub use data::{CpuInfo, HardwareInfo, MemoryInfo, OsInfo, SystemInfo, UserInfo};
pub use error::{PuppyfetchError, Result};
pub use rows::InfoRow;

use std::io::Write;

/// Collect all system information
pub fn collect_system_info(paths: &SourcePaths) -> Result<SystemInfo> {
    Ok(SystemInfo {
        os: collectors::system::collect_os_info(paths)?,
        hardware: collectors::hardware::collect_hardware_info(paths),
        user: collectors::system::collect_user_info(paths),
    })
}

/// One full fetch: gather everything, then print the art and rows to `out`.
///
/// Nothing is written when a fatal error occurs during collection.
pub fn run<W: Write>(ctx: &RunContext, paths: &SourcePaths, out: &mut W) -> Result<()> {
    ctx.ensure_config_dir();

    let info = collect_system_info(paths)?;
    let rows = rows::build_rows(&info);
    display::render(out, display::PUPPY, rows::displayable(&rows))?;
    Ok(())
}
