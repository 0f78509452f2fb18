//! Workspace list sources

use super::types::Workspace;
use crate::error::{DashError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Produces the current list of workspaces
pub trait WorkspaceSource {
    /// Load a fresh snapshot; order is significant
    fn load(&self) -> Result<Vec<Workspace>>;
}

/// Fixed list, mostly useful for tests and demos
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspaceSource {
    workspaces: Vec<Workspace>,
}

impl StaticWorkspaceSource {
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }
}

impl WorkspaceSource for StaticWorkspaceSource {
    fn load(&self) -> Result<Vec<Workspace>> {
        Ok(self.workspaces.clone())
    }
}

/// On-disk shape: a top-level `workspaces` array
#[derive(Debug, Default, Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    workspaces: Vec<Workspace>,
}

/// Reads the list from a TOML or JSON file on every load
///
/// A missing file is an empty list.
#[derive(Debug, Clone)]
pub struct FileWorkspaceSource {
    path: PathBuf,
}

impl FileWorkspaceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkspaceSource for FileWorkspaceSource {
    fn load(&self) -> Result<Vec<Workspace>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "workspace file missing, empty list");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read workspace file: {}", e),
            ))
        })?;

        // Support both TOML and JSON
        let file: WorkspaceFile = if self.path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        tracing::debug!(count = file.workspaces.len(), "loaded workspaces");
        Ok(file.workspaces)
    }
}
