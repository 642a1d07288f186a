//! Cross-entity issue unification — CAPA reports and risks in one shape.

pub mod drilldown;

use gauge_core::model::{Project, Risk};
use serde::{Deserialize, Serialize};

use crate::ranking::{self, CategoryCount};

/// Source context for issues not tied to any project.
pub const ORGANIZATIONAL_CONTEXT: &str = "Organizational";

/// Discriminant for the unified issue shape. Kind-specific fields on the
/// source records stay behind this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    #[serde(rename = "CAPA")]
    Capa,
    Risk,
}

impl IssueKind {
    /// Kind name as a raw key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Capa => "CAPA",
            Self::Risk => "Risk",
        }
    }
}

/// A CAPA report or risk normalized to one common field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedIssue {
    pub id: String,
    pub kind: IssueKind,
    /// CAPA description or risk title.
    pub label: String,
    /// Absent entries stay in the unified list but never populate a
    /// ranking bucket.
    pub root_cause: Option<String>,
    /// Originating project name; [`ORGANIZATIONAL_CONTEXT`] for risks.
    pub source_context: String,
}

/// Merge project CAPA reports and organizational risks into one
/// sequence, project order first.
pub fn unify_issues(projects: &[Project], risks: &[Risk]) -> Vec<UnifiedIssue> {
    let mut issues = Vec::new();

    for project in projects {
        for capa in &project.capa_reports {
            issues.push(UnifiedIssue {
                id: capa.id.clone(),
                kind: IssueKind::Capa,
                label: capa.description.clone(),
                root_cause: capa.root_cause.clone(),
                source_context: project.name.clone(),
            });
        }
    }

    for risk in risks {
        issues.push(UnifiedIssue {
            id: risk.id.clone(),
            kind: IssueKind::Risk,
            label: risk.title.clone(),
            root_cause: risk.root_cause.clone(),
            source_context: ORGANIZATIONAL_CONTEXT.to_string(),
        });
    }

    issues
}

/// Rank root-cause categories across the unified list. Issues without a
/// root cause contribute to no bucket.
pub fn root_cause_counts(issues: &[UnifiedIssue], top_n: usize) -> Vec<CategoryCount> {
    ranking::rank_categories(
        issues.iter().filter_map(|issue| issue.root_cause.as_deref()),
        top_n,
    )
}
