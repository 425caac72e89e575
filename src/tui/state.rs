//! Application state for the interactive panel - single source of truth.
//!
//! All state changes happen through the reducer; the view is a pure
//! function of this struct.

use crate::config::{Config, DisplayConfig};
use crate::options::{Defaults, GenerationOptions};

/// Focusable fields of the options panel, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Title,
    Theme,
    Align,
    FontWeight,
    FontSize,
    BorderRadius,
    ShowBorder,
    LineCount,
    /// Per-line badge editor, 1-based line number.
    Line(usize),
    Generate,
    Reset,
}

/// A transient message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// The generation parameters owned by the panel.
    pub options: GenerationOptions,
    /// Defaults used by the Reset action (config-seeded).
    pub defaults: Defaults,
    /// Read-only theme snapshot, consumed once at startup.
    pub themes: Vec<String>,
    /// Badge service base URL for link generation.
    pub base_url: String,
    pub display: DisplayConfig,

    /// Index into [`AppState::fields`] of the focused field.
    pub focus: usize,
    /// Edit buffer while a text field is being edited.
    pub editing: Option<String>,
    /// The last link handed to the parent, kept for display.
    pub generated_link: Option<String>,
    pub status: Option<Status>,
}

impl AppState {
    pub fn new(config: &Config, themes: Vec<String>) -> Self {
        let mut options = GenerationOptions::new(&config.defaults);
        options.sync_lines();
        AppState {
            options,
            defaults: config.defaults.clone(),
            themes,
            base_url: config.generator.base_url.clone(),
            display: config.display.clone(),
            focus: 0,
            editing: None,
            generated_link: None,
            status: None,
        }
    }

    /// The focus order, derived from the current line count.
    pub fn fields(&self) -> Vec<FieldId> {
        let mut fields = vec![
            FieldId::Title,
            FieldId::Theme,
            FieldId::Align,
            FieldId::FontWeight,
            FieldId::FontSize,
            FieldId::BorderRadius,
            FieldId::ShowBorder,
            FieldId::LineCount,
        ];
        for line in &self.options.lines {
            if let Ok(n) = line.line_number.parse::<usize>() {
                fields.push(FieldId::Line(n));
            }
        }
        fields.push(FieldId::Generate);
        fields.push(FieldId::Reset);
        fields
    }

    pub fn focused_field(&self) -> FieldId {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
