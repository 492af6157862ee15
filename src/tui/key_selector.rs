//! Key selection dialog.
//!
//! Opened when a label is submitted for checkout. The user highlights a key
//! by pressing it (or cycling with Ctrl+arrows) and confirms by pressing it
//! again or with Ctrl+G. The dialog holds the [`PendingCheckout`] the parent
//! completes once the dialog emits its result.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{ComponentEvent, ContextualComponent};
use super::key_input;
use super::keyboard::{self, KeyboardView, KeyboardWidget};
use super::{KeyLibrary, Theme};
use crate::models::KeyId;
use crate::services::PendingCheckout;
use crate::shortcuts::{Action, ShortcutRegistry, SELECTION_CONTEXT};

/// Modal dialog that picks a key for a pending checkout.
#[derive(Debug, Clone)]
pub struct KeySelectionDialog {
    pending: PendingCheckout,
    highlighted: Option<KeyId>,
}

impl KeySelectionDialog {
    /// Opens the dialog for a pending checkout with no key highlighted.
    #[must_use]
    pub const fn new(pending: PendingCheckout) -> Self {
        Self {
            pending,
            highlighted: None,
        }
    }

    /// Label being checked out.
    #[must_use]
    pub fn label(&self) -> &str {
        self.pending.label()
    }

    /// Currently highlighted key.
    #[must_use]
    pub const fn highlighted(&self) -> Option<&KeyId> {
        self.highlighted.as_ref()
    }

    /// Gives back the pending checkout once the dialog is closed.
    #[must_use]
    pub fn into_pending(self) -> PendingCheckout {
        self.pending
    }

    fn info_line(&self, context: &KeyLibrary, theme: &Theme) -> Line<'static> {
        let Some(key) = &self.highlighted else {
            return Line::from(Span::styled(
                "Press a key to highlight it",
                Style::default().fg(theme.text_secondary),
            ));
        };

        let name = context.key_db.display_name(key).to_string();
        let labels = context.registry.labels_for(key);
        let mut spans = vec![Span::styled(
            name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];

        if labels.is_empty() {
            spans.push(Span::styled(" is free", Style::default().fg(theme.success)));
        } else {
            spans.push(Span::raw(format!(" holds {}", labels.join(", "))));
            if !context.registry.allow_multi() {
                spans.push(Span::styled(
                    "  (taken: checkout will be refused)",
                    Style::default().fg(theme.warning),
                ));
            }
        }

        Line::from(spans)
    }
}

impl ContextualComponent for KeySelectionDialog {
    type Context = KeyLibrary;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event> {
        let shortcuts = ShortcutRegistry::new();

        if let Some(action) = shortcuts.lookup(SELECTION_CONTEXT, key) {
            return match action {
                Action::NextKey | Action::PreviousKey => {
                    self.highlighted = keyboard::step_key(
                        context.registry.keys(),
                        self.highlighted.as_ref(),
                        action == Action::NextKey,
                    );
                    None
                }
                Action::Confirm => self.highlighted.clone().map(ComponentEvent::KeySelected),
                Action::Cancel => Some(ComponentEvent::Cancelled),
                _ => None,
            };
        }

        let pressed = key_input::resolve_event(&context.key_db, key)?;
        if !context.registry.contains_key(&pressed) {
            return None;
        }
        if self.highlighted.as_ref() == Some(&pressed) {
            return Some(ComponentEvent::KeySelected(pressed));
        }
        self.highlighted = Some(pressed);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Select a key for '{}' ", self.pending.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Keyboard
                Constraint::Length(1), // Highlighted key info
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let view = KeyboardView {
            registry: &context.registry,
            key_db: &context.key_db,
            highlighted: self.highlighted.as_ref(),
            title: "Press a key",
            focused: true,
        };
        KeyboardWidget::render(f, chunks[0], &view, theme);

        f.render_widget(Paragraph::new(self.info_line(context, theme)), chunks[1]);

        let help = Line::from(vec![
            Span::styled("Same key again / Ctrl+G", Style::default().fg(theme.accent)),
            Span::raw(": go  "),
            Span::styled("Ctrl+←/→", Style::default().fg(theme.accent)),
            Span::raw(": cycle keys  "),
            Span::styled("Ctrl+X", Style::default().fg(theme.accent)),
            Span::raw(": cancel"),
        ]);
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(theme.text_muted)),
            chunks[2],
        );
    }
}
