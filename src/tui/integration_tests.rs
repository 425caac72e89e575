//! Integration tests for the full action flow:
//! key -> action -> reducer -> state -> effect.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::generate::generate_link_with_base;
use crate::options::{Badge, OptionsAction};

use super::action::{Action, Effect};
use super::keys::key_to_action;
use super::reducer::reduce;
use super::state::{AppState, FieldId};

fn test_state() -> AppState {
    AppState::new(
        &Config::default(),
        vec!["github".to_string(), "dracula".to_string()],
    )
}

fn focus_on(state: &mut AppState, field: FieldId) {
    let fields = state.fields();
    state.focus = fields.iter().position(|f| *f == field).unwrap();
}

fn press(state: AppState, code: KeyCode) -> (AppState, Effect) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match key_to_action(key, &state) {
        Some(action) => reduce(state, action),
        None => (state, Effect::None),
    }
}

#[test]
fn test_generate_publishes_exactly_one_link() {
    let state = test_state();

    let (state, effect) = reduce(state, Action::Generate);

    let expected = generate_link_with_base(
        &state.base_url,
        "My Tech Stack",
        "1",
        "github",
        state.options.align,
        &state.options.lines,
        true,
        "4.5",
        state.options.font_weight,
        "18",
    );
    assert_eq!(effect, Effect::PublishLink(expected.clone()));
    assert_eq!(state.generated_link, Some(expected));
}

#[test]
fn test_generate_blocked_while_radius_invalid() {
    let mut state = test_state();
    state.options.border_radius = "abc".to_string();

    let (state, effect) = reduce(state, Action::Generate);

    assert_eq!(effect, Effect::None);
    assert_eq!(state.generated_link, None);
    assert!(state.status.as_ref().unwrap().is_error);
}

#[test]
fn test_generate_unblocked_after_fixing_radius() {
    let mut state = test_state();
    state.options.border_radius = "75".to_string();

    let (state, effect) = reduce(state, Action::Generate);
    assert_eq!(effect, Effect::None);

    let (state, _) = reduce(
        state,
        Action::Options(OptionsAction::SetBorderRadius("12".to_string())),
    );
    let (_, effect) = reduce(state, Action::Generate);
    assert!(matches!(effect, Effect::PublishLink(_)));
}

#[test]
fn test_keyboard_driven_generate() {
    let mut state = test_state();
    focus_on(&mut state, FieldId::Generate);

    let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let action = key_to_action(key, &state).unwrap();
    let (_, effect) = reduce(state, action);

    assert!(matches!(effect, Effect::PublishLink(_)));
}

#[test]
fn test_full_editing_session_changes_generated_link() {
    let mut state = test_state();

    // Type a new title.
    focus_on(&mut state, FieldId::Title);
    let (mut state, _) = press(state, KeyCode::Enter);
    for _ in 0.."My Tech Stack".len() {
        let (next, _) = press(state, KeyCode::Backspace);
        state = next;
    }
    for c in "Backend".chars() {
        let (next, _) = press(state, KeyCode::Char(c));
        state = next;
    }
    let (mut state, _) = press(state, KeyCode::Enter);
    assert_eq!(state.options.title, "Backend");

    // Grow to two lines and fill the second one.
    focus_on(&mut state, FieldId::LineCount);
    let (mut state, _) = press(state, KeyCode::Right);
    assert_eq!(state.options.lines.len(), 2);

    focus_on(&mut state, FieldId::Line(2));
    let (mut state, _) = press(state, KeyCode::Enter);
    for c in "rust,axum".chars() {
        let (next, _) = press(state, KeyCode::Char(c));
        state = next;
    }
    let (state, _) = press(state, KeyCode::Enter);
    assert_eq!(
        state.options.lines[1].badges,
        vec![Badge::new("rust"), Badge::new("axum")]
    );

    let (_, effect) = reduce(state, Action::Generate);
    let Effect::PublishLink(link) = effect else {
        panic!("expected a published link");
    };
    assert!(link.contains("title=Backend"));
    assert!(link.contains("lineCount=2"));
    assert!(link.contains("2:rust,axum"));
}

#[test]
fn test_reset_restores_defaults_and_repopulates_lines() {
    let mut state = test_state();
    focus_on(&mut state, FieldId::LineCount);
    let (mut state, _) = press(state, KeyCode::Right);
    state.options.title = "Changed".to_string();

    let (state, _) = press(state, KeyCode::Char('r'));

    assert_eq!(state.options.title, "My Tech Stack");
    assert_eq!(state.options.line_count, "1");
    // The derivation re-ran after the reset.
    assert_eq!(state.options.lines.len(), 1);
    assert!(state.options.lines[0].badges.is_empty());
}

#[test]
fn test_badges_survive_line_count_round_trip() {
    let mut state = test_state();

    focus_on(&mut state, FieldId::Line(1));
    let (mut state, _) = press(state, KeyCode::Enter);
    for c in "rust".chars() {
        let (next, _) = press(state, KeyCode::Char(c));
        state = next;
    }
    let (mut state, _) = press(state, KeyCode::Enter);

    // Grow, then shrink back: line 1 keeps its badges.
    focus_on(&mut state, FieldId::LineCount);
    let (state, _) = press(state, KeyCode::Right);
    let (state, _) = press(state, KeyCode::Left);

    assert_eq!(state.options.lines.len(), 1);
    assert_eq!(state.options.lines[0].badges, vec![Badge::new("rust")]);
}
