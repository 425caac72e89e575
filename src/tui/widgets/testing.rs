//! Shared helpers for widget tests.

use ratatui::buffer::Buffer;

use crate::config::DisplayConfig;

/// Collect row `y` of a buffer into a trimmed string.
pub fn buffer_to_string(buf: &Buffer, y: u16) -> String {
    let mut result = String::new();
    for x in 0..buf.area.width {
        if let Some(cell) = buf.cell((x, y)) {
            result.push_str(cell.symbol());
        }
    }
    result.trim_end().to_string()
}

/// Display settings used by widget tests.
pub fn test_display() -> DisplayConfig {
    DisplayConfig::default()
}
