//! Panel system with trait-based composition
//!
//! Each panel implements the Panel trait for consistent behavior.
//! Panels read from the core `Dashboard` and hand user intent back to the
//! app as pending actions.

mod content;
mod workspace_list;

pub use content::{ContentPanel, PaneView};
pub use workspace_list::{ListAction, ListRow, WorkspaceListPanel};

use crate::error::Result;
use crate::events::TuiEvent;
use crate::state::AppState;
use crate::ui::Theme;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Panel trait - defines the interface for all panels
pub trait Panel {
    /// Get the panel's display name
    fn name(&self) -> &str;

    /// Handle an input event
    ///
    /// Returns Ok(true) if the event was consumed, Ok(false) to propagate.
    fn handle_input(&mut self, event: &TuiEvent, state: &mut AppState) -> Result<bool>;

    /// Render the panel to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Called when the panel area is resized
    fn on_resize(&mut self, _cols: u16, _rows: u16) {}
}
