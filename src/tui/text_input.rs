//! Single-line text input for label entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// A titled one-line input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    title: &'static str,
    value: String,
}

impl TextInput {
    /// Creates an empty input.
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            value: String::new(),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

impl Component for TextInput {
    type Event = ComponentEvent;

    /// Enter submits the contents, Esc gives up focus. Submitting leaves the
    /// field as is; the parent clears it once the label was used.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => Some(ComponentEvent::Submitted(self.value.clone())),
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Backspace => {
                self.value.pop();
                None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_color = if focused { theme.accent } else { theme.primary };

        let mut spans = vec![Span::styled(
            self.value.as_str(),
            Style::default().fg(theme.text),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        f.render_widget(input, area);
    }
}
