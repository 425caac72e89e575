//! View - a pure function from [`AppState`] to the rendered frame.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::options::validate_border_radius;
use crate::themes::theme_label;

use super::state::{AppState, FieldId};
use super::widgets::{render_button, render_row, Flex, RowValue, ROW_MARGIN};

/// Widest label is "Border Radius"; one trailing space keeps a margin.
const LABEL_WIDTH: usize = 14;

/// Helper text under the border-radius field when the value is valid.
const RADIUS_HELPER: &str = "A number between 0 and 50.";

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Min(10),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .split(f.area());

    render_panel(f, chunks[0], state);
    render_link(f, chunks[1], state);
    render_status(f, chunks[2], state);
}

/// The edit buffer, but only for the field that is focused.
fn edit_for<'a>(state: &'a AppState, field: FieldId) -> Option<&'a str> {
    if state.focused_field() == field {
        state.editing.as_deref()
    } else {
        None
    }
}

fn render_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Options ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let buf = f.buffer_mut();
    let display = &state.display;
    let focused = state.focused_field();
    let options = &state.options;
    let mut y = inner.y;

    // Title
    render_row(
        "Title",
        RowValue::Text {
            value: &options.title,
            editing: edit_for(state, FieldId::Title),
        },
        focused == FieldId::Title,
        LABEL_WIDTH,
        inner,
        y,
        buf,
        display,
    );
    y += 2;

    // Theme | Badge Align
    let cells = Flex::row().split(Rect::new(inner.x, y, inner.width, 1), 2);
    render_row(
        "Theme",
        RowValue::Select(theme_label(&options.theme)),
        focused == FieldId::Theme,
        LABEL_WIDTH,
        cells[0],
        y,
        buf,
        display,
    );
    render_row(
        "Badge Align",
        RowValue::Select(&options.align.to_string()),
        focused == FieldId::Align,
        LABEL_WIDTH,
        cells[1],
        y,
        buf,
        display,
    );
    y += 2;

    // Font Weight | Font Size
    let cells = Flex::row().split(Rect::new(inner.x, y, inner.width, 1), 2);
    render_row(
        "Font Weight",
        RowValue::Select(&options.font_weight.to_string()),
        focused == FieldId::FontWeight,
        LABEL_WIDTH,
        cells[0],
        y,
        buf,
        display,
    );
    render_row(
        "Font Size",
        RowValue::Number(&options.font_size),
        focused == FieldId::FontSize,
        LABEL_WIDTH,
        cells[1],
        y,
        buf,
        display,
    );
    y += 2;

    // Border Radius with helper text underneath
    render_row(
        "Border Radius",
        RowValue::Text {
            value: &options.border_radius,
            editing: edit_for(state, FieldId::BorderRadius),
        },
        focused == FieldId::BorderRadius,
        LABEL_WIDTH,
        inner,
        y,
        buf,
        display,
    );
    y += 1;
    if y < inner.bottom() {
        let radius_text = edit_for(state, FieldId::BorderRadius).unwrap_or(&options.border_radius);
        let (text, style) = match validate_border_radius(radius_text) {
            Some(err) => (err, Style::default().fg(display.error_fg)),
            None => (RADIUS_HELPER, Style::default().fg(Color::DarkGray)),
        };
        let indent = inner.x + ROW_MARGIN + 2 + LABEL_WIDTH as u16;
        buf.set_string(indent, y, text, style);
    }
    y += 2;

    // Border | Lines
    let cells = Flex::row().split(Rect::new(inner.x, y, inner.width, 1), 2);
    render_row(
        "Border",
        RowValue::Toggle(options.show_border),
        focused == FieldId::ShowBorder,
        LABEL_WIDTH,
        cells[0],
        y,
        buf,
        display,
    );
    render_row(
        "Lines",
        RowValue::Number(&options.line_count),
        focused == FieldId::LineCount,
        LABEL_WIDTH,
        cells[1],
        y,
        buf,
        display,
    );
    y += 2;

    y += render_separator(inner, y, buf, display);

    // Per-line badge editors
    for line in &options.lines {
        let Ok(n) = line.line_number.parse::<usize>() else {
            continue;
        };
        let badges = line
            .badges
            .iter()
            .map(|b| b.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        render_row(
            &format!("Line {}", n),
            RowValue::Text {
                value: &badges,
                editing: edit_for(state, FieldId::Line(n)),
            },
            focused == FieldId::Line(n),
            LABEL_WIDTH,
            inner,
            y,
            buf,
            display,
        );
        y += 1;
    }
    y += 1;

    y += render_separator(inner, y, buf, display);

    // Generate / Reset
    if y < inner.bottom() {
        let radius_ok = validate_border_radius(&options.border_radius).is_none();
        let x = inner.x + ROW_MARGIN + 2;
        let width = render_button(
            "Generate",
            focused == FieldId::Generate,
            radius_ok,
            x,
            y,
            buf,
            display,
        );
        render_button("Reset", focused == FieldId::Reset, true, x + width + 3, y, buf, display);
    }
}

fn render_separator(
    inner: Rect,
    y: u16,
    buf: &mut ratatui::buffer::Buffer,
    display: &crate::config::DisplayConfig,
) -> u16 {
    if y >= inner.bottom() {
        return 0;
    }
    let ch = if display.use_unicode { "─" } else { "-" };
    let width = inner.width.saturating_sub(ROW_MARGIN * 2) as usize;
    buf.set_string(
        inner.x + ROW_MARGIN,
        y,
        ch.repeat(width),
        Style::default().fg(Color::DarkGray),
    );
    2
}

fn render_link(f: &mut Frame, area: Rect, state: &AppState) {
    let text = match &state.generated_link {
        Some(link) => TextLine::from(link.as_str()),
        None => TextLine::from(Span::styled(
            "No link yet - press g or use the Generate button.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Link "));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status {
        Some(status) => {
            let color = if status.is_error {
                state.display.error_fg
            } else {
                Color::Green
            };
            TextLine::from(Span::styled(
                format!(" {}", status.text),
                Style::default().fg(color),
            ))
        }
        None => TextLine::from(Span::styled(
            " Up/Down move   Left/Right change   Enter edit/apply   g generate   r reset   q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
