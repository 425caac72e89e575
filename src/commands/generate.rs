//! Non-interactive link generation: build the options from config defaults
//! plus CLI overrides, validate, and print the shareable link.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::generate::generate_link_with_base;
use crate::options::{
    self, validate_border_radius, Align, FontWeight, GenerationOptions, Line, OptionsAction,
    MAX_FONT_SIZE, MAX_LINES, MIN_FONT_SIZE,
};
use crate::themes::THEME_IDS;

/// CLI overrides for a single generation. `None` falls back to the
/// config-seeded default.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub align: Option<Align>,
    pub no_border: bool,
    pub border_radius: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub font_size: Option<String>,
    /// One comma-separated badge list per line, in line order.
    pub lines: Vec<String>,
}

pub fn run(config: &Config, params: Params) -> Result<()> {
    let link = build_link(config, params)?;
    println!("{}", link);
    Ok(())
}

/// Validate the overrides and run them through the options reducer, so the
/// CLI and the panel share identical semantics.
pub fn build_link(config: &Config, params: Params) -> Result<String> {
    if params.lines.len() > MAX_LINES {
        bail!("at most {} lines are supported", MAX_LINES);
    }
    if let Some(theme) = &params.theme {
        if !THEME_IDS.contains(&theme.as_str()) {
            bail!("unknown theme: {} (see `themes` for the catalog)", theme);
        }
    }
    if let Some(size) = &params.font_size {
        match size.parse::<u32>() {
            Ok(n) if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&n) => {}
            _ => bail!("font size must be between {} and {}", MIN_FONT_SIZE, MAX_FONT_SIZE),
        }
    }
    if let Some(radius) = &params.border_radius {
        if let Some(err) = validate_border_radius(radius) {
            bail!("invalid border radius: {}", err);
        }
    }

    let defaults = &config.defaults;
    let mut opts = GenerationOptions::new(defaults);

    let mut actions = Vec::new();
    if let Some(title) = params.title {
        actions.push(OptionsAction::SetTitle(title));
    }
    if let Some(theme) = params.theme {
        actions.push(OptionsAction::SetTheme(theme));
    }
    if let Some(align) = params.align {
        actions.push(OptionsAction::SetAlign(align));
    }
    if params.no_border {
        actions.push(OptionsAction::SetShowBorder(false));
    }
    if let Some(radius) = params.border_radius {
        actions.push(OptionsAction::SetBorderRadius(radius));
    }
    if let Some(weight) = params.font_weight {
        actions.push(OptionsAction::SetFontWeight(weight));
    }
    if let Some(size) = params.font_size {
        actions.push(OptionsAction::SetFontSize(size));
    }
    if !params.lines.is_empty() {
        actions.push(OptionsAction::SetLineCount(params.lines.len().to_string()));
    }

    for action in actions {
        opts = options::reduce(opts, action, defaults);
    }
    opts.sync_lines();

    for (i, badge_list) in params.lines.iter().enumerate() {
        let line = Line {
            line_number: (i + 1).to_string(),
            badges: badge_list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(crate::options::Badge::new)
                .collect(),
        };
        opts = options::reduce(opts, OptionsAction::UpdateLine(line), defaults);
    }

    Ok(generate_link_with_base(
        &config.generator.base_url,
        &opts.title,
        &opts.line_count,
        &opts.theme,
        opts.align,
        &opts.lines,
        opts.show_border,
        &opts.border_radius,
        opts.font_weight,
        &opts.font_size,
    ))
}
