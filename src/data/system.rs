//! System-wide information structures

use super::hardware::HardwareInfo;

/// Complete system information gathered by puppyfetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    pub os: OsInfo,
    pub hardware: HardwareInfo,
    pub user: UserInfo,
}

/// Operating system related information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsInfo {
    pub pretty_name: String,
    pub kernel_release: String,
}

/// User and session information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub hostname: String,
    pub session_type: Option<String>,
}
