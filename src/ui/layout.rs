//! Layout management for panel arrangement

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Named regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    List,
    Content,
    Status,
}

/// Panel layout areas
///
/// ```text
/// +------------------+----------------------------------+
/// |                  |                                  |
/// |  Workspace list  |          Content pane            |
/// |      (35%)       |  (welcome / add / workspace)     |
/// |                  |                                  |
/// +------------------+----------------------------------+
/// | status bar                                          |
/// +-----------------------------------------------------+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppLayout {
    /// Left: workspace list
    pub list: Rect,

    /// Right: the active pane
    pub content: Rect,

    /// Bottom: status bar
    pub status: Rect,
}

/// Calculate layout areas for all panels
pub fn get_layout(area: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[0]);

    AppLayout {
        list: h_chunks[0],
        content: h_chunks[1],
        status: main_chunks[1],
    }
}

impl AppLayout {
    /// Determine which area contains the given coordinates
    pub fn area_at(&self, x: u16, y: u16) -> Option<Area> {
        let pos = (x, y).into();
        if self.list.contains(pos) {
            Some(Area::List)
        } else if self.content.contains(pos) {
            Some(Area::Content)
        } else if self.status.contains(pos) {
            Some(Area::Status)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_split() {
        let layout = get_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.list.width, 35);
        assert_eq!(layout.content.x, 35);
        assert_eq!(layout.status.y, 29);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_area_at() {
        let layout = get_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.area_at(2, 2), Some(Area::List));
        assert_eq!(layout.area_at(50, 10), Some(Area::Content));
        assert_eq!(layout.area_at(10, 29), Some(Area::Status));
        assert_eq!(layout.area_at(200, 200), None);
    }
}
