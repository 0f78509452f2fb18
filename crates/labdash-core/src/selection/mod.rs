//! Active pane selection
//!
//! The dashboard content area shows exactly one of three panes. Which one is
//! tracked as a [`Selection`], persisted per session by [`SelectionStore`]
//! and turned into a concrete [`Pane`] by [`resolve`] against the current
//! workspace list.
//!
//! Storage keeps the legacy integer encoding:
//!
//! | text   | selection              |
//! |--------|------------------------|
//! | `"-1"` | `Welcome` (default)    |
//! | `"-2"` | `AddWorkspace`         |
//! | `"n"`  | `Workspace(n)`, n >= 0 |
//!
//! Any other negative number decodes to `Welcome`; anything unparsable or
//! missing decodes to `-1`.

mod resolver;
mod store;

pub use resolver::{resolve, resolve_raw, Pane};
pub use store::SelectionStore;

/// Raw value of the welcome sentinel
pub const WELCOME_RAW: i64 = -1;

/// Raw value of the add-workspace sentinel
pub const ADD_WORKSPACE_RAW: i64 = -2;

/// Which pane the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing chosen yet
    #[default]
    Welcome,

    /// The "add workspace" pane
    AddWorkspace,

    /// Position in the workspace list; may be stale if the list shrank
    Workspace(usize),
}

impl Selection {
    /// Decode the legacy integer encoding
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            ADD_WORKSPACE_RAW => Selection::AddWorkspace,
            n if n >= 0 => usize::try_from(n)
                .map(Selection::Workspace)
                .unwrap_or(Selection::Welcome),
            _ => Selection::Welcome,
        }
    }

    /// Legacy integer encoding
    pub fn to_raw(self) -> i64 {
        match self {
            Selection::Welcome => WELCOME_RAW,
            Selection::AddWorkspace => ADD_WORKSPACE_RAW,
            Selection::Workspace(index) => i64::try_from(index).unwrap_or(WELCOME_RAW),
        }
    }

    /// Text written to session storage
    pub fn encode(self) -> String {
        self.to_raw().to_string()
    }

    /// Parse stored text, `-1` when absent or unparsable
    pub fn decode_raw(text: Option<&str>) -> i64 {
        text.and_then(|t| t.trim().parse::<i64>().ok())
            .unwrap_or(WELCOME_RAW)
    }

    /// Index into the workspace list, if this is a workspace selection
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Workspace(index) => Some(index),
            _ => None,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Welcome => write!(f, "welcome"),
            Selection::AddWorkspace => write!(f, "add-workspace"),
            Selection::Workspace(index) => write!(f, "workspace #{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_sentinels() {
        assert_eq!(Selection::from_raw(-1), Selection::Welcome);
        assert_eq!(Selection::from_raw(-2), Selection::AddWorkspace);
        assert_eq!(Selection::from_raw(0), Selection::Workspace(0));
        assert_eq!(Selection::from_raw(7), Selection::Workspace(7));
    }

    #[test]
    fn test_other_negatives_are_welcome() {
        for raw in [-3, -42, i64::MIN] {
            assert_eq!(Selection::from_raw(raw), Selection::Welcome, "raw {}", raw);
        }
    }

    #[test]
    fn test_decode_raw() {
        assert_eq!(Selection::decode_raw(Some("2")), 2);
        assert_eq!(Selection::decode_raw(Some("-2")), -2);
        assert_eq!(Selection::decode_raw(Some(" 5\n")), 5);
        assert_eq!(Selection::decode_raw(Some("-17")), -17);
        assert_eq!(Selection::decode_raw(Some("NaN")), -1);
        assert_eq!(Selection::decode_raw(Some("1.5")), -1);
        assert_eq!(Selection::decode_raw(Some("")), -1);
        assert_eq!(Selection::decode_raw(None), -1);
    }

    #[test]
    fn test_encode_matches_storage_format() {
        assert_eq!(Selection::Welcome.encode(), "-1");
        assert_eq!(Selection::AddWorkspace.encode(), "-2");
        assert_eq!(Selection::Workspace(3).encode(), "3");
    }

    #[test]
    fn test_persisted_text_round_trip() {
        for text in ["-1", "-2", "0", "1", "12", "-9", "9223372036854775807"] {
            let expected: i64 = text.parse().unwrap();
            assert_eq!(Selection::decode_raw(Some(text)), expected, "text {}", text);
        }
    }

    #[test]
    fn test_index() {
        assert_eq!(Selection::Workspace(4).index(), Some(4));
        assert_eq!(Selection::AddWorkspace.index(), None);
        assert_eq!(Selection::default(), Selection::Welcome);
    }
}
