//! Content panel showing the active pane

use super::Panel;
use crate::error::Result;
use crate::events::TuiEvent;
use crate::state::AppState;
use crate::ui::Theme;
use labdash_core::{Dashboard, Pane, Workspace, WorkspaceRole};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Owned snapshot of the resolved pane
#[derive(Debug, Clone, PartialEq)]
pub enum PaneView {
    Welcome,
    AddWorkspace {
        tenant_namespace: String,
        /// Pretty names of loaded candidate workspaces
        candidates: Vec<String>,
    },
    Workspace {
        index: usize,
        workspace: Workspace,
        tenant_namespace: String,
    },
}

impl PaneView {
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let tenant_namespace = dashboard.tenant_namespace().to_string();
        match dashboard.pane() {
            Pane::Welcome => PaneView::Welcome,
            Pane::AddWorkspace => PaneView::AddWorkspace {
                tenant_namespace,
                candidates: dashboard
                    .candidate_workspaces()
                    .iter()
                    .map(|ws| ws.pretty_name.clone())
                    .collect(),
            },
            Pane::Workspace { index, workspace } => PaneView::Workspace {
                index,
                workspace: workspace.clone(),
                tenant_namespace,
            },
        }
    }

    /// Short name for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            PaneView::Welcome => "welcome",
            PaneView::AddWorkspace { .. } => "add workspace",
            PaneView::Workspace { .. } => "workspace",
        }
    }

    pub fn title(&self) -> String {
        match self {
            PaneView::Welcome => "Welcome".to_string(),
            PaneView::AddWorkspace { .. } => "Add a workspace".to_string(),
            PaneView::Workspace { workspace, .. } => workspace.pretty_name.clone(),
        }
    }

    /// Body text, one entry per line
    pub fn body(&self) -> Vec<String> {
        match self {
            PaneView::Welcome => vec![
                "Pick a workspace on the left to see its details.".to_string(),
                String::new(),
                "Enter  open the highlighted row".to_string(),
                "a      add a workspace".to_string(),
                "r      reload the workspace list".to_string(),
                "c      load or hide candidate workspaces".to_string(),
                "t      switch dark/light theme".to_string(),
                "Esc    back to this page".to_string(),
                "q      quit".to_string(),
            ],
            PaneView::AddWorkspace {
                tenant_namespace,
                candidates,
            } => {
                let mut lines = vec![
                    "Joining a workspace needs approval from one of its managers.".to_string(),
                    String::new(),
                    format!("Your tenant namespace: {}", tenant_namespace),
                    "Send it to a manager of the workspace you want to join;".to_string(),
                    "it shows up here once the request is accepted.".to_string(),
                ];
                if !candidates.is_empty() {
                    lines.push(String::new());
                    lines.push("Candidate workspaces:".to_string());
                    lines.extend(candidates.iter().map(|name| format!("  - {}", name)));
                }
                lines
            }
            PaneView::Workspace {
                index,
                workspace,
                tenant_namespace,
            } => {
                let mut lines = vec![
                    format!("Name:      {}", workspace.name),
                    format!("Role:      {}", workspace.role.label()),
                    format!("Position:  {}", index + 1),
                    format!("Namespace: {}", tenant_namespace),
                ];
                if workspace.role == WorkspaceRole::Manager && workspace.has_pending_requests() {
                    lines.push(String::new());
                    lines.push(match workspace.waiting_tenants {
                        1 => "1 user is waiting to join".to_string(),
                        n => format!("{} users are waiting to join", n),
                    });
                }
                lines
            }
        }
    }
}

/// Right-hand panel rendering the current [`PaneView`]
pub struct ContentPanel {
    view: PaneView,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self {
            view: PaneView::Welcome,
        }
    }

    pub fn view(&self) -> &PaneView {
        &self.view
    }

    /// Re-resolve the pane from the dashboard
    pub fn update_from_dashboard(&mut self, dashboard: &Dashboard) {
        self.view = PaneView::from_dashboard(dashboard);
    }
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ContentPanel {
    fn name(&self) -> &str {
        "Content"
    }

    fn handle_input(&mut self, _event: &TuiEvent, _state: &mut AppState) -> Result<bool> {
        Ok(false)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.view.title(),
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(
            self.view
                .body()
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.text_secondary)))),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_unfocused));

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdash_core::{MemorySessionStore, SelectionStore, StaticWorkspaceSource};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn dashboard() -> Dashboard {
        let store = SelectionStore::with_store(Arc::new(MemorySessionStore::new()));
        let mut dashboard = Dashboard::new("tenant-alice", store);
        dashboard.set_workspaces(vec![
            Workspace::new("netlab", "Networks Lab"),
            Workspace::new("os", "Operating Systems")
                .with_role(WorkspaceRole::Manager)
                .with_waiting_tenants(3),
        ]);
        dashboard
    }

    #[test]
    fn test_view_follows_selection() {
        let mut dashboard = dashboard();
        let mut panel = ContentPanel::new();

        panel.update_from_dashboard(&dashboard);
        assert_eq!(panel.view(), &PaneView::Welcome);

        dashboard.request_add_workspace();
        panel.update_from_dashboard(&dashboard);
        assert_eq!(panel.view().label(), "add workspace");

        dashboard.select_workspace(0);
        panel.update_from_dashboard(&dashboard);
        assert_eq!(panel.view().title(), "Networks Lab");
    }

    #[test]
    fn test_manager_sees_pending_requests() {
        let mut dashboard = dashboard();
        dashboard.select_workspace(1);
        let view = PaneView::from_dashboard(&dashboard);

        assert_eq!(view.body().last().map(String::as_str), Some("3 users are waiting to join"));
    }

    #[test]
    fn test_user_does_not_see_requests() {
        let mut dashboard = dashboard();
        dashboard.select_workspace(0);
        let body = PaneView::from_dashboard(&dashboard).body();
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_welcome_lists_every_binding() {
        let body = PaneView::Welcome.body().join("\n");
        for key in ["Enter", "a ", "r ", "c ", "t ", "Esc", "q "] {
            assert!(body.contains(key), "missing {:?}", key);
        }
    }

    #[test]
    fn test_add_workspace_lists_candidates() {
        let store = SelectionStore::with_store(Arc::new(MemorySessionStore::new()));
        let mut dashboard = Dashboard::new("tenant-alice", store).with_candidates(true);
        dashboard.toggle_candidates();
        dashboard
            .load_candidates(&StaticWorkspaceSource::new(vec![Workspace::new(
                "db",
                "Databases",
            )]))
            .unwrap();
        dashboard.request_add_workspace();

        let body = PaneView::from_dashboard(&dashboard).body();
        assert_eq!(body.last().map(String::as_str), Some("  - Databases"));
    }

    #[test]
    fn test_add_workspace_mentions_namespace() {
        let mut dashboard = dashboard();
        dashboard.request_add_workspace();
        let body = PaneView::from_dashboard(&dashboard).body();
        assert!(body.iter().any(|l| l.contains("tenant-alice")));
    }
}
