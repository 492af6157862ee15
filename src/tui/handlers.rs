//! Input handlers for the main screen and the selection dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::component::{Component, ComponentEvent, ContextualComponent};
use super::{key_input, keyboard, AppState, Focus};
use crate::shortcuts::{Action, ShortcutRegistry, MAIN_CONTEXT};

/// Handle a key event. Returns `true` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    // Windows also reports releases
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if state.active_dialog.is_some() {
        handle_popup_input(state, key);
        false
    } else {
        handle_main_input(state, key)
    }
}

/// Handle input for the main screen
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> bool {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(MAIN_CONTEXT, key) {
        return dispatch_action(state, action);
    }

    match state.focus {
        Focus::Keyboard => handle_keyboard_input(state, key),
        Focus::Checkout | Focus::Return => handle_text_input(state, key),
    }
    false
}

/// Handle input while the selection dialog is open
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent) {
    let Some(dialog) = state.active_dialog.as_mut() else {
        return;
    };

    if let Some(event) = dialog.handle_input(key, &state.library) {
        state.finish_checkout(event);
    }
}

/// Execute an action. Returns `true` when the action quits.
pub fn dispatch_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::FocusCheckout => state.focus = Focus::Checkout,
        Action::FocusReturn => state.focus = Focus::Return,
        Action::FocusKeyboard => state.focus = Focus::Keyboard,
        Action::NextKey | Action::PreviousKey => {
            let next = keyboard::step_key(
                state.library.registry.keys(),
                state.highlighted_key.as_ref(),
                action == Action::NextKey,
            );
            if let Some(key) = next {
                state.highlight(key);
            }
        }
        Action::NextLabel => state.step_label(true),
        Action::PreviousLabel => state.step_label(false),
        Action::ReturnSelectedLabel => state.return_selected_label(),
        Action::Quit => return true,
        // Dialog-only actions
        Action::Confirm | Action::Cancel => {}
    }
    false
}

fn handle_keyboard_input(state: &mut AppState, key: KeyEvent) {
    let Some(pressed) = key_input::resolve_event(&state.library.key_db, key) else {
        return;
    };

    if state.library.registry.contains_key(&pressed) {
        state.highlight(pressed);
    } else {
        let name = state.library.key_db.display_name(&pressed).to_string();
        state.set_status(format!("{name} is not in the key list"));
    }
}

fn handle_text_input(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        state.focus = if state.focus == Focus::Checkout {
            Focus::Return
        } else {
            Focus::Checkout
        };
        return;
    }

    let focus = state.focus;
    let input = if focus == Focus::Checkout {
        &mut state.checkout_input
    } else {
        &mut state.return_input
    };

    match input.handle_input(key) {
        Some(ComponentEvent::Submitted(label)) if focus == Focus::Checkout => {
            state.begin_checkout(&label);
        }
        Some(ComponentEvent::Submitted(label)) => state.return_label(&label),
        Some(ComponentEvent::Cancelled) => state.focus = Focus::Keyboard,
        Some(ComponentEvent::KeySelected(_)) | None => {}
    }
}
