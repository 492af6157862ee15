//! Centralized shortcut and action system.
//!
//! Plain key presses are reserved for picking keys on the on-screen keyboard
//! and for typing labels, so every application shortcut uses Ctrl.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Shortcut context for the main screen.
pub const MAIN_CONTEXT: &str = "main";

/// Shortcut context for the key selection dialog.
pub const SELECTION_CONTEXT: &str = "selection";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === FOCUS ===
    /// Move focus to the checkout input
    FocusCheckout,
    /// Move focus to the return input
    FocusReturn,
    /// Move focus to the on-screen keyboard
    FocusKeyboard,

    // === NAVIGATION ===
    /// Highlight the next valid key
    NextKey,
    /// Highlight the previous valid key
    PreviousKey,
    /// Select the next label of the highlighted key
    NextLabel,
    /// Select the previous label of the highlighted key
    PreviousLabel,

    // === REGISTRY ===
    /// Return the selected label from the highlighted key
    ReturnSelectedLabel,

    // === DIALOG ===
    /// Confirm the highlighted key
    Confirm,
    /// Cancel the dialog
    Cancel,

    // === GENERAL ===
    /// Quit the application
    Quit,
}

impl Action {
    /// Short description used in hint lines.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FocusCheckout => "checkout",
            Self::FocusReturn => "return",
            Self::FocusKeyboard => "keyboard",
            Self::NextKey => "next key",
            Self::PreviousKey => "previous key",
            Self::NextLabel => "next label",
            Self::PreviousLabel => "previous label",
            Self::ReturnSelectedLabel => "return label",
            Self::Confirm => "go",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifiers that must be held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(&'static str, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_selection_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        self.register(ctx, K::Char('o'), M::CONTROL, Action::FocusCheckout);
        self.register(ctx, K::Char('r'), M::CONTROL, Action::FocusReturn);
        self.register(ctx, K::Char('k'), M::CONTROL, Action::FocusKeyboard);

        self.register(ctx, K::Right, M::CONTROL, Action::NextKey);
        self.register(ctx, K::Left, M::CONTROL, Action::PreviousKey);
        self.register(ctx, K::Down, M::CONTROL, Action::NextLabel);
        self.register(ctx, K::Up, M::CONTROL, Action::PreviousLabel);

        self.register(ctx, K::Char('d'), M::CONTROL, Action::ReturnSelectedLabel);

        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_selection_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = SELECTION_CONTEXT;

        self.register(ctx, K::Right, M::CONTROL, Action::NextKey);
        self.register(ctx, K::Left, M::CONTROL, Action::PreviousKey);

        self.register(ctx, K::Char('g'), M::CONTROL, Action::Confirm);
        self.register(ctx, K::Char('x'), M::CONTROL, Action::Cancel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::Quit));

        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::NextKey));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        let registry = ShortcutRegistry::new();

        for code in [KeyCode::Char('q'), KeyCode::Right, KeyCode::Esc, KeyCode::Enter] {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(registry.lookup(MAIN_CONTEXT, event), None);
            assert_eq!(registry.lookup(SELECTION_CONTEXT, event), None);
        }
    }

    #[test]
    fn test_contexts_are_separate() {
        let registry = ShortcutRegistry::new();

        let go = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(SELECTION_CONTEXT, go), Some(Action::Confirm));
        assert_eq!(registry.lookup(MAIN_CONTEXT, go), None);

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(SELECTION_CONTEXT, quit), Some(Action::Cancel));
    }
}
