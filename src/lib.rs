//! labdash - terminal front end for the lab dashboard
//!
//! Draws the workspace list and the active pane, and turns keyboard and
//! mouse input into selection changes on the core `Dashboard`.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐   select*()   ┌──────────────────┐
//! │   labdash         │ ─────────────→│   labdash-core   │
//! │   DashApp         │               │   Dashboard      │
//! │                   │ ←─────────────│                  │
//! └───────────────────┘  Pane, rows   └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - `app` - event loop and key bindings
//! - `events` - terminal events
//! - `panels` - workspace list and content pane
//! - `state` - front-end state (status bar)
//! - `ui` - layout and theme
//! - `logging` - tracing setup

pub mod app;
pub mod error;
pub mod events;
pub mod logging;
pub mod panels;
pub mod state;
pub mod ui;

pub use app::DashApp;
pub use error::{AppError, Result};
pub use events::TuiEvent;
pub use state::{AppState, MessageLevel};

// Re-export core types for convenience
pub use labdash_core::{
    DashConfig, Dashboard, Pane, Selection, SelectionStore, SessionId, Workspace,
};
