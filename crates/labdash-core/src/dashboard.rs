//! Dashboard state: selection, workspace snapshot and derived views
//!
//! The presentation layer owns a [`Dashboard`], feeds it workspace lists as
//! they arrive and calls the `select*` methods from user interaction. It
//! reads back the resolved [`Pane`] and the grid rows to draw.

use crate::selection::{resolve, Pane, Selection, SelectionStore};
use crate::workspace::{Workspace, WorkspaceGridItem, WorkspaceSource};
use crate::Result;

/// "Load/Hide candidates" toggle below the workspace list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidatesButton {
    /// Whether the button is offered at all
    pub show: bool,
    /// Whether candidates are currently loaded
    pub selected: bool,
}

impl CandidatesButton {
    pub fn new(show: bool) -> Self {
        Self {
            show,
            selected: false,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.selected {
            "Hide candidates"
        } else {
            "Load candidates"
        }
    }

    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

/// Owner of the dashboard's selection state
#[derive(Debug)]
pub struct Dashboard {
    tenant_namespace: String,
    selection: SelectionStore,
    workspaces: Vec<Workspace>,
    candidates: CandidatesButton,
    /// Workspaces offered while the candidates toggle is on
    candidate_workspaces: Vec<Workspace>,
}

impl Dashboard {
    pub fn new(tenant_namespace: impl Into<String>, selection: SelectionStore) -> Self {
        Self {
            tenant_namespace: tenant_namespace.into(),
            selection,
            workspaces: Vec::new(),
            candidates: CandidatesButton::default(),
            candidate_workspaces: Vec::new(),
        }
    }

    /// Offer the candidates toggle
    pub fn with_candidates(mut self, show: bool) -> Self {
        self.candidates = CandidatesButton::new(show);
        self
    }

    pub fn tenant_namespace(&self) -> &str {
        &self.tenant_namespace
    }

    /// Replace the workspace snapshot
    ///
    /// The selection is left alone; an index that no longer exists resolves
    /// to the welcome pane until the user picks something else.
    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        let current = self.selection.current();
        if let Some(index) = current.index() {
            if index >= workspaces.len() {
                tracing::debug!(
                    index,
                    len = workspaces.len(),
                    "selected workspace no longer listed, showing welcome"
                );
            }
        }
        self.workspaces = workspaces;
    }

    /// Load a fresh snapshot from `source`
    ///
    /// On error the previous snapshot stays in place.
    pub fn refresh(&mut self, source: &dyn WorkspaceSource) -> Result<usize> {
        let workspaces = source.load()?;
        let count = workspaces.len();
        self.set_workspaces(workspaces);
        Ok(count)
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// Pane to show for the current selection and snapshot
    pub fn pane(&self) -> Pane<'_> {
        resolve(self.selection.current(), &self.workspaces)
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection.set(selection);
    }

    pub fn select_workspace(&mut self, index: usize) {
        self.select(Selection::Workspace(index));
    }

    pub fn request_add_workspace(&mut self) {
        self.select(Selection::AddWorkspace);
    }

    pub fn show_welcome(&mut self) {
        self.select(Selection::Welcome);
    }

    /// Rows for the workspace list
    pub fn grid_items(&self) -> Vec<WorkspaceGridItem> {
        let selected = self.selection.current().index();
        self.workspaces
            .iter()
            .enumerate()
            .map(|(idx, ws)| WorkspaceGridItem {
                id: idx,
                title: ws.pretty_name.clone(),
                waiting_tenants: ws.waiting_tenants,
                selected: selected == Some(idx),
            })
            .collect()
    }

    pub fn candidates(&self) -> CandidatesButton {
        self.candidates
    }

    /// Flip the candidates toggle, no-op when it is hidden
    ///
    /// Returns whether candidates are now requested. Switching off drops
    /// the loaded candidates.
    pub fn toggle_candidates(&mut self) -> bool {
        if self.candidates.show {
            self.candidates.toggle();
            if !self.candidates.selected {
                self.candidate_workspaces.clear();
            }
        }
        self.candidates.selected
    }

    /// Load candidate workspaces from `source`
    ///
    /// On error the toggle is switched back off.
    pub fn load_candidates(&mut self, source: &dyn WorkspaceSource) -> Result<usize> {
        match source.load() {
            Ok(candidates) => {
                let count = candidates.len();
                self.candidate_workspaces = candidates;
                Ok(count)
            }
            Err(e) => {
                self.candidates.selected = false;
                self.candidate_workspaces.clear();
                Err(e)
            }
        }
    }

    pub fn candidate_workspaces(&self) -> &[Workspace] {
        &self.candidate_workspaces
    }

    /// Most recent persistence failure, if the last write failed
    pub fn persistence_error(&self) -> Option<&str> {
        self.selection.last_write_error()
    }
}
