//! Mapping from terminal key events to catalog keys.
//!
//! Terminals report characters rather than physical keys, so shifted
//! symbols are folded back onto the key that produces them on a US layout.
//! Bare modifier keys only arrive on terminals with enhanced keyboard
//! reporting; elsewhere they are reachable through key cycling.

use crossterm::event::{KeyCode, KeyEvent, ModifierKeyCode};

use crate::key_db::KeyDb;
use crate::models::KeyId;

/// Catalog spelling for a terminal key code, if it names a physical key.
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return char_key_name(c),
        KeyCode::F(n) => return Some(format!("F{n}")),
        KeyCode::Enter => "ENTER",
        KeyCode::Esc => "ESCAPE",
        KeyCode::Backspace => "BACK_SPACE",
        KeyCode::Tab | KeyCode::BackTab => "TAB",
        KeyCode::Left => "LEFT",
        KeyCode::Right => "RIGHT",
        KeyCode::Up => "UP",
        KeyCode::Down => "DOWN",
        KeyCode::Home => "HOME",
        KeyCode::End => "END",
        KeyCode::PageUp => "PAGE_UP",
        KeyCode::PageDown => "PAGE_DOWN",
        KeyCode::Insert => "INSERT",
        KeyCode::Delete => "DELETE",
        KeyCode::CapsLock => "CAPS",
        KeyCode::NumLock => "NUM_LOCK",
        KeyCode::ScrollLock => "SCROLL_LOCK",
        KeyCode::PrintScreen => "PRINTSCREEN",
        KeyCode::Pause => "PAUSE",
        KeyCode::Menu => "CONTEXT_MENU",
        KeyCode::Modifier(modifier) => modifier_key_name(modifier)?,
        _ => return None,
    };
    Some(name.to_string())
}

fn char_key_name(c: char) -> Option<String> {
    if c.is_ascii_alphanumeric() {
        return Some(c.to_ascii_uppercase().to_string());
    }
    let base = match c {
        ' ' => return Some("SPACE".to_string()),
        '!' => '1',
        '@' => '2',
        '#' => '3',
        '$' => '4',
        '%' => '5',
        '^' => '6',
        '&' => '7',
        '*' => '8',
        '(' => '9',
        ')' => '0',
        '_' => '-',
        '+' => '=',
        '{' => '[',
        '}' => ']',
        '|' => '\\',
        ':' => ';',
        '"' => '\'',
        '<' => ',',
        '>' => '.',
        '?' => '/',
        '~' => '`',
        c if c.is_ascii_punctuation() => c,
        _ => return None,
    };
    Some(base.to_string())
}

const fn modifier_key_name(modifier: ModifierKeyCode) -> Option<&'static str> {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some("SHIFT"),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some("CONTROL"),
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some("ALT"),
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => Some("WINDOWS"),
        _ => None,
    }
}

/// Resolves a key event to a catalog key.
///
/// Modifiers held with the key are ignored; only the key itself counts.
#[must_use]
pub fn resolve_event(key_db: &KeyDb, event: KeyEvent) -> Option<KeyId> {
    let name = key_name(event.code)?;
    key_db.resolve(&name).map(|def| def.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn resolve(code: KeyCode) -> Option<String> {
        let db = KeyDb::load().unwrap();
        resolve_event(&db, KeyEvent::new(code, KeyModifiers::NONE)).map(|id| id.to_string())
    }

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(resolve(KeyCode::Char('a')).as_deref(), Some("A"));
        assert_eq!(resolve(KeyCode::Char('Z')).as_deref(), Some("Z"));
        assert_eq!(resolve(KeyCode::Char('7')).as_deref(), Some("DIGIT7"));
    }

    #[test]
    fn test_shifted_symbols_fold_to_base_key() {
        assert_eq!(resolve(KeyCode::Char('!')), resolve(KeyCode::Char('1')));
        assert_eq!(resolve(KeyCode::Char('?')), resolve(KeyCode::Char('/')));
        assert_eq!(resolve(KeyCode::Char('{')), resolve(KeyCode::Char('[')));
        assert!(resolve(KeyCode::Char('/')).is_some());
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(resolve(KeyCode::Char(' ')).as_deref(), Some("SPACE"));
        assert_eq!(resolve(KeyCode::Esc).as_deref(), Some("ESCAPE"));
        assert_eq!(resolve(KeyCode::Backspace).as_deref(), Some("BACK_SPACE"));
        assert_eq!(resolve(KeyCode::BackTab), resolve(KeyCode::Tab));
        assert_eq!(resolve(KeyCode::F(5)).as_deref(), Some("F5"));
    }

    #[test]
    fn test_modifier_keys() {
        assert_eq!(
            resolve(KeyCode::Modifier(ModifierKeyCode::RightShift)).as_deref(),
            Some("SHIFT")
        );
        assert_eq!(
            resolve(KeyCode::Modifier(ModifierKeyCode::LeftControl)).as_deref(),
            Some("CONTROL")
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(resolve(KeyCode::Null), None);
        assert_eq!(resolve(KeyCode::Char('é')), None);
        assert_eq!(resolve(KeyCode::F(24)), None);
    }
}
