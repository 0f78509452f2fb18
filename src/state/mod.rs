//! TUI state management
//!
//! Front-end state only. Selection and workspace data live in the core
//! `Dashboard`.

mod app;

pub use app::{AppState, MessageLevel, StatusMessage};
