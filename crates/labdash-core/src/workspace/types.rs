//! Workspace type definitions

use serde::{Deserialize, Serialize};

/// Role of the current user inside a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceRole {
    #[default]
    User,
    Manager,
}

impl WorkspaceRole {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceRole::User => "user",
            WorkspaceRole::Manager => "manager",
        }
    }
}

/// A workspace as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Identifier of the workspace
    pub name: String,

    /// Human-readable name
    pub pretty_name: String,

    /// Role of the current user
    #[serde(default)]
    pub role: WorkspaceRole,

    /// Pending join requests
    #[serde(default)]
    pub waiting_tenants: usize,
}

impl Workspace {
    pub fn new(name: impl Into<String>, pretty_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pretty_name: pretty_name.into(),
            role: WorkspaceRole::User,
            waiting_tenants: 0,
        }
    }

    pub fn with_role(mut self, role: WorkspaceRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_waiting_tenants(mut self, count: usize) -> Self {
        self.waiting_tenants = count;
        self
    }

    /// Whether anyone is waiting to join
    pub fn has_pending_requests(&self) -> bool {
        self.waiting_tenants > 0
    }
}

/// Row of the workspace list, as handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceGridItem {
    /// Position in the current workspace list
    pub id: usize,
    pub title: String,
    pub waiting_tenants: usize,
    /// Whether this row is the current selection
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let ws: Workspace =
            serde_json::from_str(r#"{"name":"netlab","pretty_name":"Networks Lab"}"#).unwrap();
        assert_eq!(ws.role, WorkspaceRole::User);
        assert_eq!(ws.waiting_tenants, 0);
        assert!(!ws.has_pending_requests());
    }

    #[test]
    fn test_builder() {
        let ws = Workspace::new("os", "Operating Systems")
            .with_role(WorkspaceRole::Manager)
            .with_waiting_tenants(4);
        assert_eq!(ws.role.label(), "manager");
        assert!(ws.has_pending_requests());
    }
}
