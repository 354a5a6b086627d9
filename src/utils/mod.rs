//! Small helpers shared by the collectors

pub mod file;
pub mod parsing;
