//! Checkout and return flows driven through the terminal UI state.

mod fixtures;
use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keylibrary::config::{Config, ThemeMode};
use keylibrary::tui::{handle_key_event, AppState, Focus};

fn app(ids: &[&str], allow_multi: bool) -> AppState {
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Light;
    AppState::new(registry(ids, allow_multi), key_db(), config)
}

fn send(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    handle_key_event(state, KeyEvent::new(code, modifiers))
}

fn type_label(state: &mut AppState, label: &str) {
    for c in label.chars() {
        send(state, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

/// Types `label` into the checkout input and submits it.
fn start_checkout(state: &mut AppState, label: &str) {
    send(state, KeyCode::Char('o'), KeyModifiers::CONTROL);
    type_label(state, label);
    send(state, KeyCode::Enter, KeyModifiers::NONE);
}

#[test]
fn test_checkout_by_pressing_key_twice() {
    let mut state = app(&["W", "A", "S", "D"], false);

    start_checkout(&mut state, "Forward");
    let dialog = state.active_dialog.as_ref().expect("dialog should be open");
    assert_eq!(dialog.label(), "Forward");

    send(&mut state, KeyCode::Char('w'), KeyModifiers::NONE);
    assert!(state.active_dialog.is_some());
    send(&mut state, KeyCode::Char('W'), KeyModifiers::SHIFT);

    assert!(state.active_dialog.is_none());
    assert_eq!(
        state.library.registry.labels_for(&key("W")),
        &["Forward".to_string()]
    );
    assert_eq!(state.focus, Focus::Checkout);
}

#[test]
fn test_taken_key_is_reported_in_single_mode() {
    let mut state = app(&["SPACE"], false);
    state.library.registry.checkout_key("Jump", &key("SPACE"));

    start_checkout(&mut state, "Dash");
    send(&mut state, KeyCode::Char(' '), KeyModifiers::NONE);
    send(&mut state, KeyCode::Char('g'), KeyModifiers::CONTROL);

    assert!(state.active_dialog.is_none());
    assert_eq!(state.highlighted_key, Some(key("SPACE")));
    assert_eq!(state.highlighted_labels(), &["Jump".to_string()]);
    assert_eq!(state.error_message.as_deref(), Some("Space is already taken"));
    // The label stays in the input for another try
    assert_eq!(state.checkout_input.value(), "Dash");
}

#[test]
fn test_multi_mode_stacks_labels() {
    let mut state = app(&["SPACE"], true);
    state.library.registry.checkout_key("Jump", &key("SPACE"));

    start_checkout(&mut state, "Dash");
    send(&mut state, KeyCode::Char(' '), KeyModifiers::NONE);
    send(&mut state, KeyCode::Char(' '), KeyModifiers::NONE);

    assert_eq!(
        state.highlighted_labels(),
        &["Jump".to_string(), "Dash".to_string()]
    );
    assert_eq!(state.selected_label(), Some("Dash"));
}

#[test]
fn test_cancel_leaves_registry_untouched() {
    let mut state = app(&["A"], false);

    start_checkout(&mut state, "Fire");
    send(&mut state, KeyCode::Char('a'), KeyModifiers::NONE);
    send(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert!(state.active_dialog.is_none());
    assert!(!state.library.registry.is_occupied(&key("A")));
}

#[test]
fn test_ctrl_q_inside_dialog_only_cancels() {
    let mut state = app(&["A"], false);

    start_checkout(&mut state, "Fire");
    assert!(!send(&mut state, KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(state.active_dialog.is_none());
    assert!(send(&mut state, KeyCode::Char('q'), KeyModifiers::CONTROL));
}

#[test]
fn test_return_everywhere_from_input() {
    let mut state = app(&["A", "B"], false);
    state.library.registry.checkout_key("Fire", &key("A"));
    state.library.registry.checkout_key("Fire", &key("B"));

    send(&mut state, KeyCode::Char('r'), KeyModifiers::CONTROL);
    type_label(&mut state, "Fire");
    send(&mut state, KeyCode::Enter, KeyModifiers::NONE);

    assert!(!state.library.registry.is_occupied(&key("A")));
    assert!(!state.library.registry.is_occupied(&key("B")));
    assert!(state.status_message.contains("Returned 'Fire'"));
}

#[test]
fn test_empty_checkout_label_is_rejected() {
    let mut state = app(&["A"], false);

    start_checkout(&mut state, "");

    assert!(state.active_dialog.is_none());
    assert!(state.error_message.is_some());
}

#[test]
fn test_browsed_key_needs_a_fresh_pick() {
    let mut state = app(&["A", "B"], false);
    send(&mut state, KeyCode::Char('b'), KeyModifiers::NONE);

    start_checkout(&mut state, "Save");
    send(&mut state, KeyCode::Char('b'), KeyModifiers::NONE);

    assert!(state.active_dialog.is_some());
    assert!(!state.library.registry.is_occupied(&key("B")));

    send(&mut state, KeyCode::Char('b'), KeyModifiers::NONE);
    assert!(state.active_dialog.is_none());
    assert_eq!(state.library.registry.labels_for(&key("B")), &["Save".to_string()]);
}
