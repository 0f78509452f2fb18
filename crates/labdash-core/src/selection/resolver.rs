//! Selection to pane resolution

use super::Selection;
use crate::workspace::Workspace;

/// Content pane to show, borrowed from the current workspace list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane<'a> {
    Welcome,
    AddWorkspace,
    Workspace {
        index: usize,
        workspace: &'a Workspace,
    },
}

impl<'a> Pane<'a> {
    /// Workspace shown by this pane, if any
    pub fn workspace(&self) -> Option<&'a Workspace> {
        match *self {
            Pane::Workspace { workspace, .. } => Some(workspace),
            _ => None,
        }
    }
}

/// Map a selection onto the current list
///
/// Total: a workspace index at or past the end of the list falls back to
/// the welcome pane.
pub fn resolve(selection: Selection, workspaces: &[Workspace]) -> Pane<'_> {
    match selection {
        Selection::Workspace(index) => match workspaces.get(index) {
            Some(workspace) => Pane::Workspace { index, workspace },
            None => Pane::Welcome,
        },
        Selection::AddWorkspace => Pane::AddWorkspace,
        Selection::Welcome => Pane::Welcome,
    }
}

/// [`resolve`] over the legacy integer encoding
pub fn resolve_raw(raw: i64, workspaces: &[Workspace]) -> Pane<'_> {
    resolve(Selection::from_raw(raw), workspaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workspaces(n: usize) -> Vec<Workspace> {
        (0..n)
            .map(|i| Workspace::new(format!("ws-{}", i), format!("Workspace {}", i)))
            .collect()
    }

    #[test]
    fn test_welcome_sentinel_any_list() {
        for n in [0, 1, 5] {
            assert_eq!(resolve_raw(-1, &workspaces(n)), Pane::Welcome);
        }
    }

    #[test]
    fn test_add_workspace_sentinel_any_list() {
        for n in [0, 1, 5] {
            assert_eq!(resolve_raw(-2, &workspaces(n)), Pane::AddWorkspace);
        }
    }

    #[test]
    fn test_in_range_index() {
        let list = workspaces(3);
        for i in 0..3 {
            assert_eq!(
                resolve_raw(i as i64, &list),
                Pane::Workspace {
                    index: i,
                    workspace: &list[i]
                }
            );
        }
    }

    #[test]
    fn test_one_past_end_is_welcome() {
        let list = workspaces(3);
        assert_eq!(resolve_raw(3, &list), Pane::Welcome);
        assert_eq!(resolve(Selection::Workspace(3), &list), Pane::Welcome);
    }

    #[test]
    fn test_other_negatives_are_welcome() {
        let list = workspaces(3);
        for raw in [-3, -100, i64::MIN] {
            assert_eq!(resolve_raw(raw, &list), Pane::Welcome, "raw {}", raw);
        }
    }

    #[test]
    fn test_empty_list_non_negative_is_welcome() {
        for raw in [0, 1, 99, i64::MAX] {
            assert_eq!(resolve_raw(raw, &[]), Pane::Welcome, "raw {}", raw);
        }
    }

    #[test]
    fn test_stale_index_after_shrink() {
        let before = workspaces(4);
        assert_eq!(resolve_raw(3, &before).workspace(), Some(&before[3]));

        let after = workspaces(2);
        assert_eq!(resolve_raw(3, &after), Pane::Welcome);
    }

    #[test]
    fn test_total_over_integer_grid() {
        for n in 0..6 {
            let list = workspaces(n);
            for raw in -6..10i64 {
                let pane = resolve_raw(raw, &list);
                let expected = if raw >= 0 && (raw as usize) < n {
                    Pane::Workspace {
                        index: raw as usize,
                        workspace: &list[raw as usize],
                    }
                } else if raw == -2 {
                    Pane::AddWorkspace
                } else {
                    Pane::Welcome
                };
                assert_eq!(pane, expected, "raw {} len {}", raw, n);
            }
        }
    }
}
