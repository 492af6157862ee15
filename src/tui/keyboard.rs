//! Keyboard widget for rendering the on-screen keyboard

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::key_db::{KeyDb, KeyDefinition};
use crate::models::KeyId;
use crate::services::KeyRegistry;

/// Display state of one key cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not in the registry's valid key set
    Unavailable,
    /// Valid and free
    Free,
    /// Valid and holding at least one label
    Occupied,
    /// The highlighted key
    Highlighted,
}

/// Everything the keyboard needs to draw itself.
pub struct KeyboardView<'a> {
    /// Registry to read occupancy from
    pub registry: &'a KeyRegistry,
    /// Catalog providing names and geometry
    pub key_db: &'a KeyDb,
    /// Key drawn with the accent color
    pub highlighted: Option<&'a KeyId>,
    /// Block title
    pub title: &'a str,
    /// Whether the keyboard has input focus
    pub focused: bool,
}

impl KeyboardView<'_> {
    /// Display state of a catalog key.
    #[must_use]
    pub fn key_state(&self, key: &KeyId) -> KeyState {
        if self.highlighted == Some(key) {
            KeyState::Highlighted
        } else if !self.registry.contains_key(key) {
            KeyState::Unavailable
        } else if self.registry.is_occupied(key) {
            KeyState::Occupied
        } else {
            KeyState::Free
        }
    }
}

/// Steps through `keys` from `current`, wrapping at both ends.
///
/// Starts at the first (or last) key when nothing is highlighted or the
/// current key is not in the list.
#[must_use]
pub fn step_key(keys: &[KeyId], current: Option<&KeyId>, forward: bool) -> Option<KeyId> {
    if keys.is_empty() {
        return None;
    }
    let position = current.and_then(|key| keys.iter().position(|k| k == key));
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => keys.len() - 1,
        (Some(idx), true) => (idx + 1) % keys.len(),
        (Some(idx), false) => (idx + keys.len() - 1) % keys.len(),
    };
    keys.get(next).cloned()
}

/// Keyboard widget renders the on-screen keyboard
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Render the keyboard widget
    pub fn render(f: &mut Frame, area: Rect, view: &KeyboardView, theme: &Theme) {
        let border_color = if view.focused {
            theme.accent
        } else {
            theme.primary
        };

        let mut lines = Self::build_rows(view, theme);
        lines.push(Line::from(""));
        lines.push(Self::legend(theme));

        let keyboard = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", view.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        f.render_widget(keyboard, area);
    }

    /// One line per keyboard row, one character per quarter-key unit.
    #[must_use]
    pub fn build_rows(view: &KeyboardView, theme: &Theme) -> Vec<Line<'static>> {
        let mut rows: Vec<Vec<&KeyDefinition>> = vec![Vec::new(); view.key_db.row_count()];
        for key in view.key_db.keys() {
            if let Some(geometry) = key.geometry {
                rows[usize::from(geometry.row)].push(key);
            }
        }

        rows.into_iter()
            .map(|mut keys| {
                keys.sort_by_key(|key| key.geometry.map_or(0, |g| g.x));
                let mut spans = Vec::new();
                let mut cursor = 0u16;

                for key in keys {
                    let Some(geometry) = key.geometry else {
                        continue;
                    };
                    if geometry.x > cursor {
                        spans.push(Span::raw(" ".repeat(usize::from(geometry.x - cursor))));
                    }
                    let style = Self::key_style(view.key_state(&key.id), theme);
                    spans.push(Span::styled(
                        Self::cell_text(&key.name, geometry.width),
                        style,
                    ));
                    spans.push(Span::raw(" "));
                    cursor = geometry.end();
                }

                Line::from(spans)
            })
            .collect()
    }

    /// Key name centered in a cell one character narrower than the key,
    /// leaving a gap to the next key.
    fn cell_text(name: &str, width: u16) -> String {
        let inner = usize::from(width.saturating_sub(1));
        let shown: String = name.chars().take(inner).collect();
        format!("{shown:^inner$}")
    }

    fn key_style(state: KeyState, theme: &Theme) -> Style {
        match state {
            KeyState::Highlighted => Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            KeyState::Occupied => Style::default().fg(theme.background).bg(theme.success),
            KeyState::Free => Style::default().fg(theme.text).bg(theme.surface),
            KeyState::Unavailable => Style::default().fg(theme.text_muted),
        }
    }

    fn legend(theme: &Theme) -> Line<'static> {
        let entry = |state, text: &'static str| {
            [
                Span::styled("   ", Self::key_style(state, theme)),
                Span::styled(format!(" {text}  "), Style::default().fg(theme.text_secondary)),
            ]
        };

        Line::from(
            [
                entry(KeyState::Free, "free"),
                entry(KeyState::Occupied, "taken"),
                entry(KeyState::Highlighted, "highlighted"),
            ]
            .concat(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(KeyboardWidget::cell_text("A", 4), " A ");
        assert_eq!(KeyboardWidget::cell_text("Space", 4), "Spa");
        assert_eq!(KeyboardWidget::cell_text("Bksp", 8).len(), 7);
    }

    #[test]
    fn test_step_key_wraps() {
        let keys = vec![KeyId::new("A"), KeyId::new("B"), KeyId::new("C")];

        assert_eq!(step_key(&keys, None, true), Some(KeyId::new("A")));
        assert_eq!(step_key(&keys, None, false), Some(KeyId::new("C")));
        assert_eq!(step_key(&keys, Some(&keys[2]), true), Some(KeyId::new("A")));
        assert_eq!(step_key(&keys, Some(&keys[0]), false), Some(KeyId::new("C")));
        assert_eq!(step_key(&keys, Some(&KeyId::new("Z")), true), Some(KeyId::new("A")));
        assert_eq!(step_key(&[], None, true), None);
    }

    #[test]
    fn test_key_state() {
        let db = KeyDb::load().unwrap();
        let mut registry = KeyRegistry::new([KeyId::new("A"), KeyId::new("B")], false);
        registry.checkout_key("save", &KeyId::new("A"));
        let highlighted = KeyId::new("B");

        let view = KeyboardView {
            registry: &registry,
            key_db: &db,
            highlighted: Some(&highlighted),
            title: "Keyboard",
            focused: true,
        };

        assert_eq!(view.key_state(&KeyId::new("A")), KeyState::Occupied);
        assert_eq!(view.key_state(&KeyId::new("B")), KeyState::Highlighted);
        assert_eq!(view.key_state(&KeyId::new("C")), KeyState::Unavailable);

        let view = KeyboardView {
            highlighted: None,
            ..view
        };
        assert_eq!(view.key_state(&KeyId::new("B")), KeyState::Free);
    }

    #[test]
    fn test_build_rows_places_keys_by_geometry() {
        let db = KeyDb::load().unwrap();
        let registry = KeyRegistry::new(Vec::new(), false);
        let view = KeyboardView {
            registry: &registry,
            key_db: &db,
            highlighted: None,
            title: "Keyboard",
            focused: false,
        };

        let rows = KeyboardWidget::build_rows(&view, &Theme::dark());
        assert_eq!(rows.len(), db.row_count());

        let home_row = line_text(&rows[3]);
        assert!(home_row.starts_with(" Caps "));
        // A sits at x=7 with width 4
        assert_eq!(&home_row[7..10], " A ");

        let bottom = line_text(&rows[5]);
        assert!(bottom.contains("Space"));
    }
}
