//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets that draw the registry using Ratatui.

pub mod component;
pub mod handlers;
pub mod key_input;
pub mod key_selector;
pub mod keyboard;
pub mod label_panel;
pub mod status_bar;
pub mod text_input;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{Assignment, Config};
use crate::constants::APP_NAME;
use crate::key_db::KeyDb;
use crate::models::KeyId;
use crate::parser::SkippedEntry;
use crate::services::{KeyRegistry, PendingCheckout};

// Re-export TUI components
pub use component::{Component, ComponentEvent, ContextualComponent};
pub use handlers::handle_key_event;
pub use key_selector::KeySelectionDialog;
pub use keyboard::{KeyboardView, KeyboardWidget};
pub use label_panel::LabelPanel;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
pub use theme::Theme;

/// Registry plus the catalog used to name and draw its keys.
#[derive(Debug, Clone)]
pub struct KeyLibrary {
    /// Key assignments
    pub registry: KeyRegistry,
    /// Key catalog
    pub key_db: KeyDb,
}

/// Which part of the main screen receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Key presses highlight keys on the on-screen keyboard
    #[default]
    Keyboard,
    /// Typing goes to the checkout label
    Checkout,
    /// Typing goes to the return label
    Return,
}

/// Application state - single source of truth
///
/// The registry is only changed through its checkout/return calls; every
/// frame re-reads it, so nothing here caches occupancy.
pub struct AppState {
    // Core data
    /// Registry and key catalog
    pub library: KeyLibrary,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Element receiving plain key presses
    pub focus: Focus,
    /// Label to check out
    pub checkout_input: TextInput,
    /// Label to return from every key
    pub return_input: TextInput,
    /// Key shown in the label panel
    pub highlighted_key: Option<KeyId>,
    /// Index into the highlighted key's labels
    pub selected_label: usize,
    /// Open selection dialog, holding the pending checkout
    pub active_dialog: Option<KeySelectionDialog>,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message (warnings rendered via status)
    pub status_color_override: Option<Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(registry: KeyRegistry, key_db: KeyDb, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let status_message = format!(
            "{} keys available ({} mode)",
            registry.len(),
            mode_name(registry.allow_multi())
        );

        Self {
            library: KeyLibrary { registry, key_db },
            config,
            theme,
            focus: Focus::default(),
            checkout_input: TextInput::new("Checkout"),
            return_input: TextInput::new("Return"),
            highlighted_key: None,
            selected_label: 0,
            active_dialog: None,
            status_message,
            status_color_override: None,
            error_message: None,
        }
    }

    /// Reports problems found while building the registry in the status bar.
    pub fn report_startup(&mut self, skipped: &[SkippedEntry], rejected: &[Assignment]) {
        if skipped.is_empty() && rejected.is_empty() {
            return;
        }

        let mut parts = Vec::new();
        if !skipped.is_empty() {
            parts.push(format!("{} key list entries skipped", skipped.len()));
        }
        if !rejected.is_empty() {
            parts.push(format!("{} default assignments refused", rejected.len()));
        }
        let message = format!("{} (see log)", parts.join(", "));
        self.set_status_with_style(message, self.theme.warning);
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Highlights `key` and selects its first label.
    pub fn highlight(&mut self, key: KeyId) {
        self.highlighted_key = Some(key);
        self.selected_label = 0;
    }

    /// Labels checked out to the highlighted key.
    #[must_use]
    pub fn highlighted_labels(&self) -> &[String] {
        self.highlighted_key
            .as_ref()
            .map(|key| self.library.registry.labels_for(key))
            .unwrap_or(&[])
    }

    /// Label under the cursor in the label panel.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.highlighted_labels()
            .get(self.selected_label)
            .map(String::as_str)
    }

    /// Moves the label cursor, wrapping at both ends.
    pub fn step_label(&mut self, forward: bool) {
        let count = self.highlighted_labels().len();
        if count == 0 {
            return;
        }
        self.selected_label = if forward {
            (self.selected_label + 1) % count
        } else {
            (self.selected_label + count - 1) % count
        };
    }

    /// Opens the selection dialog for `label`.
    ///
    /// Blank labels are refused before any selection starts.
    pub fn begin_checkout(&mut self, label: &str) {
        if label.trim().is_empty() {
            self.set_error("Enter a label to check out");
            return;
        }

        debug!("Selecting key for '{}'", label);
        let pending = PendingCheckout::new(label);
        self.active_dialog = Some(KeySelectionDialog::new(pending));
        self.set_status(format!("Pick a key for '{label}'"));
    }

    /// Closes the selection dialog and completes its pending checkout.
    ///
    /// The picked key is highlighted even when the registry refuses the
    /// checkout, so the user sees who holds it.
    pub fn finish_checkout(&mut self, event: ComponentEvent) {
        let Some(dialog) = self.active_dialog.take() else {
            return;
        };
        let label = dialog.label().to_string();
        let choice = match event {
            ComponentEvent::KeySelected(key) => Some(key),
            ComponentEvent::Submitted(_) | ComponentEvent::Cancelled => None,
        };

        let Some(outcome) = dialog
            .into_pending()
            .complete(&mut self.library.registry, choice)
        else {
            self.set_status(format!("Checkout of '{label}' cancelled"));
            return;
        };

        let name = self.library.key_db.display_name(&outcome.key).to_string();
        self.highlight(outcome.key);

        if outcome.accepted {
            info!("Checked out '{}' to {}", label, name);
            self.checkout_input.clear();
            self.selected_label = self.highlighted_labels().len().saturating_sub(1);
            self.set_status(format!("Checked out '{label}' to {name}"));
        } else {
            self.set_error(format!("{name} is already taken"));
        }
    }

    /// Returns `label` from every key holding it.
    pub fn return_label(&mut self, label: &str) {
        if label.trim().is_empty() {
            self.set_error("Enter a label to return");
            return;
        }

        let names: Vec<String> = self
            .library
            .registry
            .keys_for_label(label)
            .into_iter()
            .map(|key| self.library.key_db.display_name(key).to_string())
            .collect();

        if self.library.registry.return_label(label) {
            info!("Returned '{}' from {}", label, names.join(", "));
            self.return_input.clear();
            self.clamp_selected_label();
            self.set_status(format!("Returned '{label}' from {}", names.join(", ")));
        } else {
            self.set_error(format!("'{label}' is not checked out"));
        }
    }

    /// Returns the selected label from the highlighted key only.
    pub fn return_selected_label(&mut self) {
        let (Some(key), Some(label)) = (
            self.highlighted_key.clone(),
            self.selected_label().map(str::to_string),
        ) else {
            self.set_error("No label selected");
            return;
        };

        if self.library.registry.return_key(&label, &key) {
            let name = self.library.key_db.display_name(&key).to_string();
            info!("Returned '{}' from {}", label, name);
            self.clamp_selected_label();
            self.set_status(format!("Returned '{label}' from {name}"));
        }
    }

    fn clamp_selected_label(&mut self) {
        let count = self.highlighted_labels().len();
        self.selected_label = self.selected_label.min(count.saturating_sub(1));
    }
}

const fn mode_name(allow_multi: bool) -> &'static str {
    if allow_multi {
        "multi"
    } else {
        "single"
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout; resizes re-render on the next pass
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key) {
                    break; // User quit
                }
            }
        }
    }

    info!("Exiting {}", APP_NAME);
    Ok(())
}

/// Render the UI
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title bar
            Constraint::Min(10),    // Keyboard and labels
            Constraint::Length(3),  // Inputs
            Constraint::Length(4),  // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    render_inputs(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(dialog) = &state.active_dialog {
        let area = centered_rect(90, 80, f.area());
        dialog.render(f, area, &state.theme, &state.library);
    }
}

/// Render title bar with mode and occupancy
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let registry = &state.library.registry;
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "- {} mode - {}/{} keys taken",
                mode_name(registry.allow_multi()),
                registry.occupied_keys().count(),
                registry.len()
            ),
            Style::default().fg(state.theme.text_secondary),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the keyboard beside the label panel
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    // Widest row plus borders
    let keyboard_width = state.library.key_db.row_span() + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(keyboard_width), Constraint::Length(32)])
        .split(area);

    let view = KeyboardView {
        registry: &state.library.registry,
        key_db: &state.library.key_db,
        highlighted: state.highlighted_key.as_ref(),
        title: "Keyboard",
        focused: state.focus == Focus::Keyboard,
    };
    KeyboardWidget::render(f, chunks[0], &view, &state.theme);
    LabelPanel::render(f, chunks[1], state, &state.theme);
}

fn render_inputs(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    state.checkout_input.render(
        f,
        chunks[0],
        &state.theme,
        state.focus == Focus::Checkout,
    );
    state
        .return_input
        .render(f, chunks[1], &state.theme, state.focus == Focus::Return);
}

/// Helper to create centered rectangle
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
