//! TUI event types
//!
//! Terminal input is wrapped once here so panels never touch crossterm's
//! top-level event enum directly.

use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

/// TUI-specific events
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Terminal resize event with new dimensions (width, height)
    Resize(u16, u16),
}

impl TuiEvent {
    /// Convert a crossterm event, dropping the kinds the dashboard ignores
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Some(TuiEvent::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(TuiEvent::Mouse(mouse)),
            CrosstermEvent::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}
