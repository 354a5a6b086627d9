//! Ordered label/value rows shown beside the art.

use crate::data::SystemInfo;
use crate::display::Color;

/// Number of row slots in the layout.
pub const ROW_COUNT: usize = 6;

/// One line of system information. Printed only when both halves are
/// present and the value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl InfoRow {
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub fn is_displayable(&self) -> bool {
        self.as_pair().is_some()
    }

    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match (&self.label, &self.value) {
            (Some(label), Some(value)) if !value.is_empty() => Some((label.as_str(), value.as_str())),
            _ => None,
        }
    }
}

/// Rows in display order: identity, os, cpu, kernel, session type, memory.
pub fn build_rows(info: &SystemInfo) -> [InfoRow; ROW_COUNT] {
    let identity = format!(
        "{}@{}",
        Color::BrightMagenta.paint(&info.user.username),
        Color::BrightBlue.paint(&info.user.hostname)
    );

    [
        InfoRow::new("", Some(identity)),
        InfoRow::new(
            Color::BrightBlue.paint("os     "),
            Some(info.os.pretty_name.clone()),
        ),
        InfoRow::new(
            Color::BrightMagenta.paint("cpu    "),
            Some(info.hardware.cpu.summary.clone()),
        ),
        InfoRow::new(
            Color::BoldWhite.paint("kernel "),
            Some(info.os.kernel_release.clone()),
        ),
        InfoRow::new(
            Color::BrightMagenta.paint("server "),
            info.user.session_type.clone(),
        ),
        InfoRow::new(
            Color::BrightBlue.paint("memory "),
            Some(info.hardware.memory.formatted.clone()),
        ),
    ]
}

/// The rows that will actually be printed, in order.
pub fn displayable(rows: &[InfoRow]) -> impl Iterator<Item = (&str, &str)> {
    rows.iter().filter_map(InfoRow::as_pair)
}
