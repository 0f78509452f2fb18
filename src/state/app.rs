//! Application-level TUI state

use labdash_core::SessionId;

/// Front-end state shared with panels
pub struct AppState {
    /// Should the application quit
    pub should_quit: bool,

    /// Status bar message
    pub status_message: Option<StatusMessage>,

    /// Session whose storage backs the selection
    pub session: SessionId,
}

/// Status bar message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl AppState {
    pub fn new(session: SessionId) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            session,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Info);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Warning);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::new(SessionId::from("s1"));
        assert!(!state.should_quit);
        assert!(state.status_message.is_none());
        assert_eq!(state.session.as_str(), "s1");
    }

    #[test]
    fn test_status_messages() {
        let mut state = AppState::new(SessionId::from("s1"));
        state.warning("stale");
        assert_eq!(
            state.status_message,
            Some(StatusMessage {
                text: "stale".to_string(),
                level: MessageLevel::Warning,
            })
        );
        state.clear_status();
        assert!(state.status_message.is_none());
    }
}
