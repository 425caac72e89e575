//! Field row widgets for the options panel.
//!
//! Each row composes: margin + selection indicator + padded label + value.
//! Always renders as 1 line.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Left margin inside the panel, in columns.
pub const ROW_MARGIN: u16 = 2;

/// How the value half of a row is rendered.
#[derive(Debug, Clone, Copy)]
pub enum RowValue<'a> {
    /// Free text; shows the edit buffer with a cursor while editing.
    Text {
        value: &'a str,
        editing: Option<&'a str>,
    },
    /// A cycling selector.
    Select(&'a str),
    /// A numeric stepper.
    Number(&'a str),
    /// A boolean toggle.
    Toggle(bool),
}

/// Render one field row. Returns the height consumed (1, or 0 when `y`
/// falls outside `area`).
pub fn render_row(
    label: &str,
    value: RowValue,
    is_selected: bool,
    max_label_width: usize,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    display: &DisplayConfig,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let mut x = area.x;

    buf.set_string(x, y, " ".repeat(ROW_MARGIN as usize), Style::default());
    x += ROW_MARGIN;

    if is_selected {
        let indicator = if display.use_unicode { "► " } else { "> " };
        buf.set_string(x, y, indicator, Style::default().fg(display.selection_fg));
    } else {
        buf.set_string(x, y, "  ", Style::default());
    }
    x += 2;

    let padded_label = format!("{:<width$}", label, width = max_label_width);
    buf.set_string(x, y, &padded_label, Style::default());
    x += padded_label.width() as u16;

    match value {
        RowValue::Text { value, editing } => {
            render_text_value(value, editing, x, y, buf);
        }
        RowValue::Select(value) => {
            let marker = if display.use_unicode { "▼" } else { "v" };
            buf.set_string(x, y, format!("{} {}", marker, value), Style::default());
        }
        RowValue::Number(value) => {
            let text = if display.use_unicode {
                format!("◂ {} ▸", value)
            } else {
                format!("< {} >", value)
            };
            buf.set_string(x, y, text, Style::default());
        }
        RowValue::Toggle(value) => {
            let text = match (value, display.use_unicode) {
                (true, true) => "[✓]",
                (true, false) => "[x]",
                (false, _) => "[ ]",
            };
            let style = if value {
                Style::default().fg(display.selection_fg)
            } else {
                Style::default()
            };
            buf.set_string(x, y, text, style);
        }
    }

    1
}

/// Render a text value, showing the edit buffer with a block cursor while
/// editing. Returns the width consumed.
fn render_text_value(value: &str, editing: Option<&str>, x: u16, y: u16, buf: &mut Buffer) -> u16 {
    let text = match editing {
        Some(buffer) => format!("{}█", buffer),
        None => value.to_string(),
    };
    buf.set_string(x, y, &text, Style::default());
    text.width() as u16
}

/// Render a `[ Label ]` button. Disabled buttons are dimmed. Returns the
/// width consumed.
pub fn render_button(
    label: &str,
    is_selected: bool,
    enabled: bool,
    x: u16,
    y: u16,
    buf: &mut Buffer,
    display: &DisplayConfig,
) -> u16 {
    let text = format!("[ {} ]", label);
    let style = if !enabled {
        Style::default().fg(ratatui::style::Color::DarkGray)
    } else if is_selected {
        Style::default().fg(display.selection_fg)
    } else {
        Style::default()
    };
    buf.set_string(x, y, &text, style);
    text.width() as u16
}
