//! Drill-down selection state — a single toggled category key.

use serde::{Deserialize, Serialize};

use super::UnifiedIssue;

/// The one piece of mutable state this layer owns: the currently
/// selected root-cause category, or none. A single scalar with
/// last-write-wins semantics; no concurrent writers expected in an
/// interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrilldownState {
    selected: Option<String>,
}

impl DrilldownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category: selecting the already-selected key clears it.
    pub fn toggle(&mut self, category: &str) {
        if self.selected.as_deref() == Some(category) {
            self.selected = None;
        } else {
            self.selected = Some(category.to_string());
        }
    }

    /// Clear any selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected raw category key, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Detail slice for the current selection; empty until a category is
    /// chosen.
    pub fn filter<'a>(&self, issues: &'a [UnifiedIssue]) -> Vec<&'a UnifiedIssue> {
        let Some(selected) = self.selected.as_deref() else {
            return Vec::new();
        };
        issues
            .iter()
            .filter(|issue| issue.root_cause.as_deref() == Some(selected))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueKind;

    fn issue(id: &str, root_cause: Option<&str>) -> UnifiedIssue {
        UnifiedIssue {
            id: id.to_string(),
            kind: IssueKind::Capa,
            label: format!("issue {id}"),
            root_cause: root_cause.map(str::to_string),
            source_context: "Line 3 Audit".to_string(),
        }
    }

    #[test]
    fn test_toggle_reclick_clears() {
        let mut state = DrilldownState::new();
        state.toggle("Process");
        assert_eq!(state.selected(), Some("Process"));
        state.toggle("Process");
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_toggle_switches_selection() {
        let mut state = DrilldownState::new();
        state.toggle("Process");
        state.toggle("Equipment");
        assert_eq!(state.selected(), Some("Equipment"));
    }

    #[test]
    fn test_filter_empty_without_selection() {
        let issues = vec![issue("c1", Some("Process")), issue("c2", None)];
        let state = DrilldownState::new();
        assert!(state.filter(&issues).is_empty());
    }

    #[test]
    fn test_filter_matches_selected_category_only() {
        let issues = vec![
            issue("c1", Some("Process")),
            issue("c2", Some("Equipment")),
            issue("c3", Some("Process")),
            issue("c4", None),
        ];
        let mut state = DrilldownState::new();
        state.toggle("Process");

        let filtered = state.filter(&issues);
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }
}
