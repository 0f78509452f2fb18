//! Configuration types for labdash
//!
//! Defines the structure of `.labdash.toml` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Namespace of the tenant viewing the dashboard
    #[serde(default = "default_tenant_namespace")]
    pub tenant_namespace: String,

    /// Whether the "Load candidates" toggle is offered under the workspace list
    #[serde(default)]
    pub show_candidates: bool,

    /// Session storage settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Workspace list source
    #[serde(default)]
    pub workspaces: WorkspacesConfig,
}

fn default_tenant_namespace() -> String {
    "default".to_string()
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            tenant_namespace: default_tenant_namespace(),
            show_candidates: false,
            session: SessionConfig::default(),
            workspaces: WorkspacesConfig::default(),
        }
    }
}

/// Session storage section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding one file per session
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Session to resume; a fresh one is generated when unset
    #[serde(default)]
    pub id: Option<String>,
}

impl SessionConfig {
    /// Session directory, falling back to `<cache_dir>/labdash/sessions`
    pub fn effective_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("labdash")
                .join("sessions")
        })
    }
}

/// Workspace source section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspacesConfig {
    /// TOML or JSON file listing the workspaces
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Candidate workspaces loaded by the "Load candidates" toggle
    #[serde(default)]
    pub candidates_file: Option<PathBuf>,
}
