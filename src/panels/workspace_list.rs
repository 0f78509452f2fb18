//! Workspace list panel
//!
//! One row per workspace, followed by an "Add workspace" row and, when
//! enabled, the candidates toggle. The cursor is independent from the
//! dashboard selection: moving it does nothing until Enter or a click.

use super::Panel;
use crate::error::Result;
use crate::events::TuiEvent;
use crate::state::AppState;
use crate::ui::{truncate_to_width, Theme};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use labdash_core::{CandidatesButton, Dashboard, Selection, WorkspaceGridItem};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One line of the list
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Workspace(WorkspaceGridItem),
    AddWorkspace { selected: bool },
    Candidates(CandidatesButton),
}

/// What the user asked for from the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListAction {
    Select(Selection),
    ToggleCandidates,
}

/// Workspace list panel state
pub struct WorkspaceListPanel {
    rows: Vec<ListRow>,

    /// Row under the cursor
    cursor: usize,

    /// First visible row
    scroll_offset: usize,

    /// Visible rows, updated on render
    visible_height: usize,

    /// List area for mouse detection
    list_area: Rect,

    /// Cursor follows the dashboard selection on the first sync only
    initialized: bool,

    pending_action: Option<ListAction>,
}

impl WorkspaceListPanel {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10,
            list_area: Rect::default(),
            initialized: false,
            pending_action: None,
        }
    }

    /// Take the pending action, if any
    pub fn take_pending_action(&mut self) -> Option<ListAction> {
        self.pending_action.take()
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rebuild rows from the dashboard
    pub fn update_from_dashboard(&mut self, dashboard: &Dashboard) {
        let selection = dashboard.selection();
        let mut rows: Vec<ListRow> = dashboard
            .grid_items()
            .into_iter()
            .map(ListRow::Workspace)
            .collect();
        let workspace_count = rows.len();

        rows.push(ListRow::AddWorkspace {
            selected: selection == Selection::AddWorkspace,
        });
        let candidates = dashboard.candidates();
        if candidates.show {
            rows.push(ListRow::Candidates(candidates));
        }
        self.rows = rows;

        if !self.initialized {
            self.initialized = true;
            self.cursor = match selection {
                Selection::Workspace(i) if i < workspace_count => i,
                Selection::AddWorkspace => workspace_count,
                _ => 0,
            };
        }

        // Clamp cursor if rows were removed
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.ensure_visible();
    }

    fn select_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.ensure_visible();
    }

    fn select_next(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
        self.ensure_visible();
    }

    /// Ensure the cursor row is visible
    fn ensure_visible(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Queue the action of the row under the cursor
    fn activate(&mut self) {
        self.pending_action = match self.rows.get(self.cursor) {
            Some(ListRow::Workspace(item)) => Some(ListAction::Select(Selection::Workspace(item.id))),
            Some(ListRow::AddWorkspace { .. }) => Some(ListAction::Select(Selection::AddWorkspace)),
            Some(ListRow::Candidates(_)) => Some(ListAction::ToggleCandidates),
            None => None,
        };
    }

    /// Move the cursor to a clicked row and activate it
    fn click_at(&mut self, row: u16) -> bool {
        // Inner area excludes the border
        let top = self.list_area.y + 1;
        let bottom = self.list_area.y + self.list_area.height.saturating_sub(1);
        if row < top || row >= bottom {
            return false;
        }

        let index = self.scroll_offset + (row - top) as usize;
        if index < self.rows.len() {
            self.cursor = index;
            self.activate();
            true
        } else {
            false
        }
    }

    fn row_line(&self, row: &ListRow, width: usize, theme: &Theme) -> Line<'static> {
        match row {
            ListRow::Workspace(item) => {
                let marker = if item.selected { "▸ " } else { "  " };
                let badge = if item.waiting_tenants > 0 {
                    format!(" {} ", item.waiting_tenants)
                } else {
                    String::new()
                };
                // Marker is two columns wide
                let title_width = width.saturating_sub(2 + badge.len() + 1);
                let title_style = if item.selected {
                    Style::default()
                        .fg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_primary)
                };

                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(theme.accent_primary)),
                    Span::styled(truncate_to_width(&item.title, title_width), title_style),
                ];
                if !badge.is_empty() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        badge,
                        Style::default().bg(theme.badge_bg).fg(theme.badge_fg),
                    ));
                }
                Line::from(spans)
            }
            ListRow::AddWorkspace { selected } => {
                let style = if *selected {
                    Style::default()
                        .fg(theme.accent_highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                Line::from(Span::styled("+ Add workspace", style))
            }
            ListRow::Candidates(button) => Line::from(Span::styled(
                format!("[ {} ]", button.label()),
                Style::default().fg(theme.text_muted),
            )),
        }
    }
}

impl Default for WorkspaceListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for WorkspaceListPanel {
    fn name(&self) -> &str {
        "Workspaces"
    }

    fn handle_input(&mut self, event: &TuiEvent, _state: &mut AppState) -> Result<bool> {
        match event {
            TuiEvent::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.select_prev();
                    Ok(true)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.select_next();
                    Ok(true)
                }
                KeyCode::Home => {
                    self.cursor = 0;
                    self.ensure_visible();
                    Ok(true)
                }
                KeyCode::End => {
                    self.cursor = self.rows.len().saturating_sub(1);
                    self.ensure_visible();
                    Ok(true)
                }
                KeyCode::Enter => {
                    self.activate();
                    Ok(true)
                }
                _ => Ok(false),
            },
            TuiEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Ok(self.click_at(mouse.row)),
                MouseEventKind::ScrollUp => {
                    self.select_prev();
                    Ok(true)
                }
                MouseEventKind::ScrollDown => {
                    self.select_next();
                    Ok(true)
                }
                _ => Ok(false),
            },
            TuiEvent::Resize(..) => Ok(false),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.list_area = area;
        self.visible_height = area.height.saturating_sub(2) as usize;
        self.ensure_visible();

        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.visible_height)
            .map(|(idx, row)| {
                let item = ListItem::new(self.row_line(row, width, theme));
                if idx == self.cursor {
                    item.style(Style::default().bg(theme.bg_selection))
                } else {
                    item
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(format!(" {} ", self.name()));

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use labdash_core::{MemorySessionStore, SelectionStore, SessionId, SessionStore, Workspace};
    use std::sync::Arc;

    fn dashboard(persisted: Option<&str>, count: usize, candidates: bool) -> Dashboard {
        let store = Arc::new(MemorySessionStore::new());
        if let Some(value) = persisted {
            store.set("dashboard_view", value).unwrap();
        }
        let mut dashboard =
            Dashboard::new("tenant", SelectionStore::with_store(store)).with_candidates(candidates);
        dashboard.set_workspaces(
            (0..count)
                .map(|i| Workspace::new(format!("ws-{}", i), format!("Workspace {}", i)))
                .collect(),
        );
        dashboard
    }

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state() -> AppState {
        AppState::new(SessionId::from("test"))
    }

    #[test]
    fn test_rows_include_add_and_candidates() {
        let mut panel = WorkspaceListPanel::new();
        panel.update_from_dashboard(&dashboard(None, 2, true));

        assert_eq!(panel.rows().len(), 4);
        assert!(matches!(panel.rows()[2], ListRow::AddWorkspace { selected: false }));
        assert!(matches!(panel.rows()[3], ListRow::Candidates(_)));
    }

    #[test]
    fn test_cursor_starts_on_restored_selection() {
        let mut panel = WorkspaceListPanel::new();
        panel.update_from_dashboard(&dashboard(Some("2"), 3, false));
        assert_eq!(panel.cursor(), 2);

        let mut panel = WorkspaceListPanel::new();
        panel.update_from_dashboard(&dashboard(Some("-2"), 3, false));
        assert_eq!(panel.cursor(), 3);

        let mut panel = WorkspaceListPanel::new();
        panel.update_from_dashboard(&dashboard(Some("9"), 3, false));
        assert_eq!(panel.cursor(), 0);
    }

    #[test]
    fn test_enter_selects_row_under_cursor() {
        let mut panel = WorkspaceListPanel::new();
        let mut state = state();
        panel.update_from_dashboard(&dashboard(None, 3, false));

        panel.handle_input(&key(KeyCode::Down), &mut state).unwrap();
        panel.handle_input(&key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(
            panel.take_pending_action(),
            Some(ListAction::Select(Selection::Workspace(1)))
        );
        assert_eq!(panel.take_pending_action(), None);

        panel.handle_input(&key(KeyCode::End), &mut state).unwrap();
        panel.handle_input(&key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(
            panel.take_pending_action(),
            Some(ListAction::Select(Selection::AddWorkspace))
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut panel = WorkspaceListPanel::new();
        let mut state = state();
        panel.update_from_dashboard(&dashboard(None, 1, false));

        for _ in 0..5 {
            panel.handle_input(&key(KeyCode::Down), &mut state).unwrap();
        }
        assert_eq!(panel.cursor(), 1);
        for _ in 0..5 {
            panel.handle_input(&key(KeyCode::Up), &mut state).unwrap();
        }
        assert_eq!(panel.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let mut panel = WorkspaceListPanel::new();
        let mut state = state();
        panel.update_from_dashboard(&dashboard(None, 5, false));
        panel.handle_input(&key(KeyCode::End), &mut state).unwrap();
        assert_eq!(panel.cursor(), 5);

        panel.update_from_dashboard(&dashboard(None, 1, false));
        assert_eq!(panel.cursor(), 1);
    }

    #[test]
    fn test_candidates_row_toggles() {
        let mut panel = WorkspaceListPanel::new();
        let mut state = state();
        panel.update_from_dashboard(&dashboard(None, 0, true));
        panel.handle_input(&key(KeyCode::End), &mut state).unwrap();
        panel.handle_input(&key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(panel.take_pending_action(), Some(ListAction::ToggleCandidates));
    }

    #[test]
    fn test_click_selects_row() {
        let mut panel = WorkspaceListPanel::new();
        let mut state = state();
        panel.update_from_dashboard(&dashboard(None, 3, false));
        panel.list_area = Rect::new(0, 0, 30, 10);
        panel.visible_height = 8;

        let click = |row| {
            TuiEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 3,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };

        // Row 0 is the border
        assert!(!panel.handle_input(&click(0), &mut state).unwrap());
        assert!(panel.handle_input(&click(3), &mut state).unwrap());
        assert_eq!(
            panel.take_pending_action(),
            Some(ListAction::Select(Selection::Workspace(2)))
        );
        // Past the last row
        assert!(!panel.handle_input(&click(7), &mut state).unwrap());
    }
}
