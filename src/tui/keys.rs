//! Keyboard event to action mapping.
//!
//! Converts crossterm key events into reducer actions, using the current
//! state to decide what the key means for the focused field.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::options::OptionsAction;

use super::action::Action;
use super::state::{AppState, FieldId};

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // While editing, every key belongs to the edit buffer.
    if state.editing.is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Esc => Some(Action::CancelEdit),
            KeyCode::Backspace => Some(Action::EditBackspace),
            KeyCode::Char(c) => Some(Action::EditInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),

        KeyCode::Up | KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Down | KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Left => Some(Action::CycleLeft),
        KeyCode::Right => Some(Action::CycleRight),

        KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('r') => Some(Action::Options(OptionsAction::Reset)),

        KeyCode::Char(' ') if state.focused_field() == FieldId::ShowBorder => {
            Some(Action::Options(OptionsAction::SetShowBorder(
                !state.options.show_border,
            )))
        }

        KeyCode::Enter => {
            let field = state.focused_field();
            debug!("KEY: Enter on {:?}", field);
            match field {
                FieldId::Title | FieldId::BorderRadius | FieldId::Line(_) => {
                    Some(Action::StartEditing)
                }
                FieldId::ShowBorder => Some(Action::Options(OptionsAction::SetShowBorder(
                    !state.options.show_border,
                ))),
                FieldId::Theme
                | FieldId::Align
                | FieldId::FontWeight
                | FieldId::FontSize
                | FieldId::LineCount => Some(Action::CycleRight),
                FieldId::Generate => Some(Action::Generate),
                FieldId::Reset => Some(Action::Options(OptionsAction::Reset)),
            }
        }

        _ => None,
    }
}
