//! Component trait pattern for TUI components.
//!
//! This module defines the traits and types used to implement self-contained,
//! testable TUI components that can handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::KeyId;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool);
}

/// Extended trait for components that need shared context.
///
/// The key selection dialog needs read access to the registry and key
/// catalog while it runs; this trait hands them in on every call instead of
/// letting the component hold references into application state.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events that can be emitted by popup components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User confirmed a key
    KeySelected(KeyId),

    /// User submitted text
    Submitted(String),

    /// User cancelled without making changes
    Cancelled,
}
