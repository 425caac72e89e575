//! Pure state reducer for the panel.
//!
//! Takes the current state and an action, returns the new state and an
//! optional effect. No I/O happens here; publishing the generated link is
//! returned as [`Effect::PublishLink`] and executed by the run loop.

use tracing::debug;

use crate::generate::generate_link_with_base;
use crate::options::{
    self, validate_border_radius, Badge, Line, OptionsAction, MAX_FONT_SIZE, MAX_LINES,
    MIN_FONT_SIZE, MIN_LINES,
};

use super::action::{Action, Effect};
use super::state::{AppState, FieldId};

pub fn reduce(mut state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::Options(options_action) => {
            debug!("OPTIONS: {:?}", options_action);
            let is_reset = options_action == OptionsAction::Reset;
            apply_options(&mut state, options_action);
            if is_reset {
                state.set_status("Options reset to defaults");
            }
            (state, Effect::None)
        }

        Action::FocusNext => {
            let len = state.fields().len();
            state.focus = (state.focus + 1) % len;
            state.clear_status();
            (state, Effect::None)
        }

        Action::FocusPrevious => {
            let len = state.fields().len();
            state.focus = (state.focus + len - 1) % len;
            state.clear_status();
            (state, Effect::None)
        }

        Action::StartEditing => {
            let buffer = match state.focused_field() {
                FieldId::Title => Some(state.options.title.clone()),
                FieldId::BorderRadius => Some(state.options.border_radius.clone()),
                FieldId::Line(n) => line_edit_buffer(&state, n),
                _ => None,
            };
            if let Some(buffer) = buffer {
                state.editing = Some(buffer);
                state.set_status("Editing... (Enter to save, Esc to cancel)");
            }
            (state, Effect::None)
        }

        Action::EditInput(c) => {
            if let Some(buffer) = &mut state.editing {
                buffer.push(c);
            }
            (state, Effect::None)
        }

        Action::EditBackspace => {
            if let Some(buffer) = &mut state.editing {
                buffer.pop();
            }
            (state, Effect::None)
        }

        Action::CancelEdit => {
            state.editing = None;
            state.set_status("Editing cancelled");
            (state, Effect::None)
        }

        Action::CommitEdit => {
            let Some(buffer) = state.editing.take() else {
                return (state, Effect::None);
            };
            match state.focused_field() {
                FieldId::Title => {
                    apply_options(&mut state, OptionsAction::SetTitle(buffer));
                    state.set_status("Title updated");
                }
                FieldId::BorderRadius => {
                    // The value is stored either way; Generate stays gated
                    // while it is invalid.
                    let error = validate_border_radius(&buffer);
                    apply_options(&mut state, OptionsAction::SetBorderRadius(buffer));
                    match error {
                        Some(err) => state.set_error(err),
                        None => state.set_status("Border radius updated"),
                    }
                }
                FieldId::Line(n) => {
                    let line = parse_line_input(n, &buffer);
                    apply_options(&mut state, OptionsAction::UpdateLine(line));
                    state.set_status(format!("Line {} updated", n));
                }
                _ => {}
            }
            (state, Effect::None)
        }

        Action::CycleLeft => {
            cycle(&mut state, false);
            (state, Effect::None)
        }

        Action::CycleRight => {
            cycle(&mut state, true);
            (state, Effect::None)
        }

        Action::Generate => {
            if let Some(err) = validate_border_radius(&state.options.border_radius) {
                debug!("GENERATE: blocked by border radius: {}", err);
                state.set_error(err);
                return (state, Effect::None);
            }

            let o = &state.options;
            let link = generate_link_with_base(
                &state.base_url,
                &o.title,
                &o.line_count,
                &o.theme,
                o.align,
                &o.lines,
                o.show_border,
                &o.border_radius,
                o.font_weight,
                &o.font_size,
            );
            debug!("GENERATE: {}", link);
            state.generated_link = Some(link.clone());
            state.set_status("Link generated");
            (state, Effect::PublishLink(link))
        }

        Action::Quit => (state, Effect::None),
    }
}

/// Run a domain action through the options reducer and re-derive the line
/// list, then clamp focus in case the field list shrank.
fn apply_options(state: &mut AppState, action: OptionsAction) {
    state.options = options::reduce(state.options.clone(), action, &state.defaults);
    state.options.sync_lines();
    let max = state.fields().len() - 1;
    if state.focus > max {
        state.focus = max;
    }
}

/// Edit buffer for a per-line badge editor: comma-separated badge ids.
fn line_edit_buffer(state: &AppState, line_number: usize) -> Option<String> {
    let number = line_number.to_string();
    state
        .options
        .lines
        .iter()
        .find(|l| l.line_number == number)
        .map(|l| {
            l.badges
                .iter()
                .map(|b| b.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
}

/// Parse the comma-separated badge list typed into a line editor.
fn parse_line_input(line_number: usize, raw: &str) -> Line {
    let badges = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Badge::new)
        .collect();
    Line {
        line_number: line_number.to_string(),
        badges,
    }
}

/// Cycle the focused selector or step the focused numeric control.
fn cycle(state: &mut AppState, forward: bool) {
    let action = match state.focused_field() {
        FieldId::Theme => {
            if state.themes.is_empty() {
                return;
            }
            let len = state.themes.len();
            let idx = state
                .themes
                .iter()
                .position(|t| *t == state.options.theme)
                .unwrap_or(0);
            let idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
            OptionsAction::SetTheme(state.themes[idx].clone())
        }
        FieldId::Align => {
            let align = state.options.align;
            OptionsAction::SetAlign(if forward { align.next() } else { align.prev() })
        }
        FieldId::FontWeight => {
            let weight = state.options.font_weight;
            OptionsAction::SetFontWeight(if forward { weight.next() } else { weight.prev() })
        }
        FieldId::FontSize => OptionsAction::SetFontSize(step_numeric(
            &state.options.font_size,
            MIN_FONT_SIZE,
            MAX_FONT_SIZE,
            forward,
        )),
        FieldId::LineCount => OptionsAction::SetLineCount(step_numeric(
            &state.options.line_count,
            MIN_LINES as u32,
            MAX_LINES as u32,
            forward,
        )),
        FieldId::ShowBorder => OptionsAction::SetShowBorder(!state.options.show_border),
        _ => return,
    };
    apply_options(state, action);
}

/// Step a numeric-string field by one, clamped to `[min, max]`. Unparseable
/// input snaps to the minimum.
fn step_numeric(value: &str, min: u32, max: u32, forward: bool) -> String {
    let stepped = match value.parse::<u32>() {
        Ok(v) if forward => v.saturating_add(1),
        Ok(v) => v.saturating_sub(1),
        Err(_) => min,
    };
    stepped.clamp(min, max).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::options::{Align, FontWeight};

    fn test_state() -> AppState {
        AppState::new(
            &Config::default(),
            vec![
                "github".to_string(),
                "github_dark".to_string(),
                "dracula".to_string(),
            ],
        )
    }

    fn focus_on(state: &mut AppState, field: FieldId) {
        let fields = state.fields();
        state.focus = fields.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn test_step_numeric_clamps() {
        assert_eq!(step_numeric("18", 15, 30, true), "19");
        assert_eq!(step_numeric("30", 15, 30, true), "30");
        assert_eq!(step_numeric("15", 15, 30, false), "15");
        assert_eq!(step_numeric("junk", 15, 30, true), "15");
    }

    #[test]
    fn test_parse_line_input_trims_and_drops_empties() {
        let line = parse_line_input(2, " rust, react ,, go ");
        assert_eq!(line.line_number, "2");
        assert_eq!(
            line.badges,
            vec![Badge::new("rust"), Badge::new("react"), Badge::new("go")]
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let state = test_state();
        let len = state.fields().len();

        let (state, _) = reduce(state, Action::FocusPrevious);
        assert_eq!(state.focus, len - 1);
        let (state, _) = reduce(state, Action::FocusNext);
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_cycle_theme_follows_snapshot_order() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::Theme);

        let (state, _) = reduce(state, Action::CycleRight);
        assert_eq!(state.options.theme, "github_dark");
        let (state, _) = reduce(state, Action::CycleLeft);
        assert_eq!(state.options.theme, "github");
        // Wraps backwards to the end of the catalog.
        let (state, _) = reduce(state, Action::CycleLeft);
        assert_eq!(state.options.theme, "dracula");
    }

    #[test]
    fn test_cycle_align_and_weight() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::Align);
        let (mut state, _) = reduce(state, Action::CycleRight);
        assert_eq!(state.options.align, Align::Center);

        focus_on(&mut state, FieldId::FontWeight);
        let (state, _) = reduce(state, Action::CycleLeft);
        assert_eq!(state.options.font_weight, FontWeight::Normal);
    }

    #[test]
    fn test_line_count_step_rederives_lines() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::LineCount);

        let (state, _) = reduce(state, Action::CycleRight);
        assert_eq!(state.options.line_count, "2");
        assert_eq!(state.options.lines.len(), 2);

        let (state, _) = reduce(state, Action::CycleLeft);
        assert_eq!(state.options.line_count, "1");
        assert_eq!(state.options.lines.len(), 1);
    }

    #[test]
    fn test_toggle_border_via_cycle() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::ShowBorder);
        assert!(state.options.show_border);

        let (state, _) = reduce(state, Action::CycleRight);
        assert!(!state.options.show_border);
    }

    #[test]
    fn test_title_editing_flow() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::Title);

        let (state, _) = reduce(state, Action::StartEditing);
        assert_eq!(state.editing.as_deref(), Some("My Tech Stack"));

        let (state, _) = reduce(state, Action::EditBackspace);
        let (state, _) = reduce(state, Action::EditInput('k'));
        let (state, _) = reduce(state, Action::CommitEdit);

        // Backspace removed the trailing 'k', the edit re-typed it.
        assert_eq!(state.editing, None);
        assert_eq!(state.options.title, "My Tech Stack");
    }

    #[test]
    fn test_cancel_edit_keeps_old_value() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::BorderRadius);

        let (state, _) = reduce(state, Action::StartEditing);
        let (state, _) = reduce(state, Action::EditInput('9'));
        let (state, _) = reduce(state, Action::CancelEdit);

        assert_eq!(state.editing, None);
        assert_eq!(state.options.border_radius, "4.5");
    }

    #[test]
    fn test_commit_invalid_radius_stores_value_and_reports_error() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::BorderRadius);

        let (mut state, _) = reduce(state, Action::StartEditing);
        state.editing = Some("75".to_string());
        let (state, _) = reduce(state, Action::CommitEdit);

        assert_eq!(state.options.border_radius, "75");
        assert!(state.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_line_commit_replaces_line_wholesale() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::LineCount);
        let (mut state, _) = reduce(state, Action::CycleRight); // 2 lines

        focus_on(&mut state, FieldId::Line(2));
        let (mut state, _) = reduce(state, Action::StartEditing);
        state.editing = Some("rust, react".to_string());
        let (state, _) = reduce(state, Action::CommitEdit);

        assert_eq!(state.options.lines[0].badges, Vec::new());
        assert_eq!(
            state.options.lines[1].badges,
            vec![Badge::new("rust"), Badge::new("react")]
        );
    }

    #[test]
    fn test_focus_clamped_when_line_count_shrinks() {
        let mut state = test_state();
        focus_on(&mut state, FieldId::LineCount);
        let (state, _) = reduce(state, Action::CycleRight);
        let (mut state, _) = reduce(state, Action::CycleRight); // 3 lines

        // Focus the last line editor, then shrink back to 1 line.
        focus_on(&mut state, FieldId::Line(3));
        let (state, _) = reduce(
            state,
            Action::Options(OptionsAction::SetLineCount("1".to_string())),
        );

        assert!(state.focus < state.fields().len());
        assert_eq!(state.options.lines.len(), 1);
    }
}
