//! Plain data produced by the collectors

pub mod hardware;
pub mod system;

pub use hardware::{CpuInfo, HardwareInfo, MemoryInfo};
pub use system::{OsInfo, SystemInfo, UserInfo};
