//! Panel listing the labels checked out to the highlighted key.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Label list for the highlighted key
pub struct LabelPanel;

impl LabelPanel {
    /// Render the label panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let Some(key) = &state.highlighted_key else {
            let empty = Paragraph::new("Press a key to see its labels")
                .style(Style::default().fg(theme.text_muted))
                .block(Self::block(" No key selected ".to_string(), theme));
            f.render_widget(empty, area);
            return;
        };

        let title = format!(" {} ", state.library.key_db.display_name(key));
        let labels = state.library.registry.labels_for(key);

        if labels.is_empty() {
            let free = Paragraph::new("Free")
                .style(Style::default().fg(theme.success))
                .block(Self::block(title, theme));
            f.render_widget(free, area);
            return;
        }

        let items: Vec<ListItem> = labels
            .iter()
            .map(|label| ListItem::new(label.as_str()).style(Style::default().fg(theme.text)))
            .collect();

        let list = List::new(items)
            .block(Self::block(title, theme))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_label.min(labels.len() - 1)));

        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn block(title: String, theme: &Theme) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
    }
}
