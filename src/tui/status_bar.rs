//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::shortcuts::Action;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if let Some(color) = state.status_color_override {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            ))
        } else {
            Line::from(state.status_message.clone())
        };

        let status = Paragraph::new(vec![message_line, Self::help_line(state, theme)]).block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );

        f.render_widget(status, area);
    }

    /// Shortcuts that apply to the current focus.
    #[must_use]
    pub fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        let mut hints: Vec<(&'static str, Action)> = match state.focus {
            Focus::Keyboard => vec![
                ("Ctrl+←/→", Action::NextKey),
                ("Ctrl+↑/↓", Action::NextLabel),
                ("Ctrl+D", Action::ReturnSelectedLabel),
                ("Ctrl+O", Action::FocusCheckout),
                ("Ctrl+R", Action::FocusReturn),
            ],
            Focus::Checkout => vec![("Ctrl+R", Action::FocusReturn)],
            Focus::Return => vec![("Ctrl+O", Action::FocusCheckout)],
        };
        if state.focus != Focus::Keyboard {
            hints.push(("Esc/Ctrl+K", Action::FocusKeyboard));
        }
        hints.push(("Ctrl+Q", Action::Quit));

        let mut labelled: Vec<(&'static str, &'static str)> = hints
            .into_iter()
            .map(|(key, action)| (key, action.description()))
            .collect();
        match state.focus {
            Focus::Checkout => labelled.insert(0, ("Enter", "pick key")),
            Focus::Return => labelled.insert(0, ("Enter", "return everywhere")),
            Focus::Keyboard => labelled.insert(0, ("any key", "highlight")),
        }
        labelled
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in Self::hints(state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
