//! Generation options for the badge card: the state owned by the options
//! panel, its reducer, and the field validation rules.
//!
//! All state changes go through [`reduce`]; the function is pure so the
//! panel, the CLI and the tests share the exact same semantics.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Smallest allowed line count.
pub const MIN_LINES: usize = 1;
/// Largest allowed line count.
pub const MAX_LINES: usize = 5;

/// Font size bounds (design units).
pub const MIN_FONT_SIZE: u32 = 15;
pub const MAX_FONT_SIZE: u32 = 30;

/// Border radius bounds, checked against the integer prefix of the field.
pub const MIN_BORDER_RADIUS: i64 = 0;
pub const MAX_BORDER_RADIUS: i64 = 50;

/// Horizontal alignment of badges within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    pub fn next(self) -> Self {
        match self {
            Align::Left => Align::Center,
            Align::Center => Align::Right,
            Align::Right => Align::Left,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Align::Left => Align::Right,
            Align::Center => Align::Left,
            Align::Right => Align::Center,
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        };
        f.write_str(s)
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(format!("unknown align: {}", other)),
        }
    }
}

/// Weight of the title/badge font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Normal,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Thin,
        FontWeight::Normal,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    pub fn next(self) -> Self {
        match self {
            FontWeight::Thin => FontWeight::Normal,
            FontWeight::Normal => FontWeight::Semibold,
            FontWeight::Semibold => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Thin,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FontWeight::Thin => FontWeight::Bold,
            FontWeight::Normal => FontWeight::Thin,
            FontWeight::Semibold => FontWeight::Normal,
            FontWeight::Bold => FontWeight::Semibold,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FontWeight::Thin => "thin",
            FontWeight::Normal => "normal",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        };
        f.write_str(s)
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thin" => Ok(FontWeight::Thin),
            "normal" => Ok(FontWeight::Normal),
            "semibold" => Ok(FontWeight::Semibold),
            "bold" => Ok(FontWeight::Bold),
            other => Err(format!("unknown font weight: {}", other)),
        }
    }
}

/// A badge descriptor. Opaque to the panel: only the identifier travels
/// through, the rendering service decides what it looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
}

impl Badge {
    pub fn new(id: impl Into<String>) -> Self {
        Badge { id: id.into() }
    }
}

/// One row of the generated card, identified by a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub line_number: String,
    pub badges: Vec<Badge>,
}

impl Line {
    pub fn empty(line_number: impl Into<String>) -> Self {
        Line {
            line_number: line_number.into(),
            badges: Vec::new(),
        }
    }
}

/// Default values for every configurable field.
///
/// The `Default` impl carries the documented defaults; the config file's
/// `[defaults]` table may override them for the initial panel state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub title: String,
    pub line_count: String,
    pub theme: String,
    pub align: Align,
    pub show_border: bool,
    pub border_radius: String,
    pub font_weight: FontWeight,
    pub font_size: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            title: "My Tech Stack".to_string(),
            line_count: "1".to_string(),
            theme: "github".to_string(),
            align: Align::Left,
            show_border: true,
            border_radius: "4.5".to_string(),
            font_weight: FontWeight::Semibold,
            font_size: "18".to_string(),
        }
    }
}

/// The full set of user-configurable generation parameters.
///
/// Numeric fields are kept as the raw strings the user typed; parsing
/// happens at validation and generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub title: String,
    pub line_count: String,
    pub theme: String,
    pub align: Align,
    pub show_border: bool,
    pub border_radius: String,
    pub font_weight: FontWeight,
    pub font_size: String,
    pub lines: Vec<Line>,
}

impl GenerationOptions {
    /// Fresh options from a set of defaults. `lines` starts empty; the
    /// derivation fills it in on the next evaluation (see [`derive_lines`]).
    pub fn new(defaults: &Defaults) -> Self {
        GenerationOptions {
            title: defaults.title.clone(),
            line_count: defaults.line_count.clone(),
            theme: defaults.theme.clone(),
            align: defaults.align,
            show_border: defaults.show_border,
            border_radius: defaults.border_radius.clone(),
            font_weight: defaults.font_weight,
            font_size: defaults.font_size.clone(),
            lines: Vec::new(),
        }
    }

    /// Re-derive `lines` from the current line count.
    pub fn sync_lines(&mut self) {
        self.lines = derive_lines(&self.line_count, &self.lines);
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions::new(&Defaults::default())
    }
}

/// Actions accepted by the options reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsAction {
    SetTitle(String),
    SetLineCount(String),
    SetTheme(String),
    SetAlign(Align),
    SetShowBorder(bool),
    SetBorderRadius(String),
    SetFontWeight(FontWeight),
    SetFontSize(String),
    UpdateLine(Line),
    Reset,
}

/// Pure options reducer.
///
/// `Reset` restores `defaults` and leaves `lines` empty; the caller is
/// expected to re-run the derivation afterwards, exactly like changing the
/// line count.
pub fn reduce(mut options: GenerationOptions, action: OptionsAction, defaults: &Defaults) -> GenerationOptions {
    match action {
        OptionsAction::SetTitle(title) => options.title = title,
        OptionsAction::SetLineCount(count) => {
            options.line_count = count;
            options.sync_lines();
        }
        OptionsAction::SetTheme(theme) => options.theme = theme,
        OptionsAction::SetAlign(align) => options.align = align,
        OptionsAction::SetShowBorder(show) => options.show_border = show,
        OptionsAction::SetBorderRadius(radius) => options.border_radius = radius,
        OptionsAction::SetFontWeight(weight) => options.font_weight = weight,
        OptionsAction::SetFontSize(size) => options.font_size = size,
        OptionsAction::UpdateLine(line) => options.lines = update_line(&options.lines, &line),
        OptionsAction::Reset => return GenerationOptions::new(defaults),
    }
    options
}

/// Derive the line list from the line count: exactly one entry per integer
/// in `[1, line_count]`, in order. Entries still in range are reused so
/// their badges survive; entries out of range are dropped; newly-in-range
/// numbers get fresh empty lines.
pub fn derive_lines(line_count: &str, prior: &[Line]) -> Vec<Line> {
    let count = line_count
        .parse::<usize>()
        .unwrap_or(MIN_LINES)
        .clamp(MIN_LINES, MAX_LINES);

    (1..=count)
        .map(|n| {
            let number = n.to_string();
            prior
                .iter()
                .find(|l| l.line_number == number)
                .cloned()
                .unwrap_or_else(|| Line::empty(number))
        })
        .collect()
}

/// Replace the entry whose `line_number` matches `incoming`, preserving
/// position and the rest of the list. An incoming line with no matching
/// entry is dropped, never appended.
pub fn update_line(lines: &[Line], incoming: &Line) -> Vec<Line> {
    lines
        .iter()
        .map(|l| {
            if l.line_number == incoming.line_number {
                incoming.clone()
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Validate the raw border-radius field. Returns `None` when valid.
///
/// The range check looks at the leading digit run only, matching the
/// historical behavior of the field: "49.9" checks 49 and passes, "60.1"
/// checks 60 and fails, and ".5" has no integer prefix and skips the
/// range check entirely.
pub fn validate_border_radius(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return Some("Please provide a border radius!");
    }

    if !raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Some("Please provide a valid number!");
    }

    let prefix: String = raw.chars().take_while(char::is_ascii_digit).collect();
    if !prefix.is_empty() {
        match prefix.parse::<i64>() {
            Ok(n) if (MIN_BORDER_RADIUS..=MAX_BORDER_RADIUS).contains(&n) => {}
            // Parse failure here means the digit run overflowed i64,
            // which is far beyond the allowed range anyway.
            _ => return Some("Please provide a value between 0 and 50"),
        }
    }

    None
}

/// Title accepts anything; the generation service is responsible for any
/// further constraints.
pub fn validate_title(_raw: &str) -> Option<&'static str> {
    None
}
