//! Workspace records and the sources that load them
//!
//! The dashboard never owns workspace data. A [`WorkspaceSource`] produces a
//! point-in-time list; identity is the position in that list and nothing
//! else.

mod source;
mod types;

pub use source::{FileWorkspaceSource, StaticWorkspaceSource, WorkspaceSource};
pub use types::{Workspace, WorkspaceGridItem, WorkspaceRole};
