//! Turn system text sources and OS calls into summary values

pub mod hardware;
pub mod system;
