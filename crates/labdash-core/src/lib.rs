//! labdash core - selection and session persistence for the lab dashboard
//!
//! This crate provides the UI-agnostic part of the dashboard:
//! - Active pane selection (welcome, add-workspace, a workspace)
//! - Session-scoped persistence of that selection
//! - Workspace records and the sources that load them
//! - Configuration loading
//!
//! Any front end can drive it through [`Dashboard`].
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐  select()     ┌──────────────────────┐
//! │   Any UI          │ ─────────────→│  Dashboard           │
//! │ (TUI, Web, GUI)   │               │   SelectionStore ──→ SessionStore
//! │                   │ ←─────────────│   resolve()          │
//! └───────────────────┘  Pane, rows   └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use labdash_core::{Dashboard, MemorySessionStore, Pane, SelectionStore, Workspace};
//! use std::sync::Arc;
//!
//! let store = SelectionStore::with_store(Arc::new(MemorySessionStore::new()));
//! let mut dashboard = Dashboard::new("tenant-alice", store);
//! dashboard.set_workspaces(vec![Workspace::new("netlab", "Networks Lab")]);
//!
//! assert_eq!(dashboard.pane(), Pane::Welcome);
//! dashboard.select_workspace(0);
//! assert!(dashboard.pane().workspace().is_some());
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod selection;
pub mod session;
pub mod workspace;

pub use config::{load_config, ConfigError, DashConfig};
pub use dashboard::{CandidatesButton, Dashboard};
pub use error::{DashError, Result};
pub use selection::{resolve, resolve_raw, Pane, Selection, SelectionStore};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionId, SessionStore, SessionValue, StorageKey,
};
pub use workspace::{
    FileWorkspaceSource, StaticWorkspaceSource, Workspace, WorkspaceGridItem, WorkspaceRole,
    WorkspaceSource,
};
