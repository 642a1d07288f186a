//! Compliance scoring over checklist items.

use chrono::NaiveDate;
use gauge_core::model::{ChecklistItem, ComplianceStatus, Project};
use serde::Serialize;

/// Scored summary of a checklist slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceScore {
    /// 0–100, rounded half away from zero.
    pub percentage: u32,
    /// Items counted after `NotApplicable` exclusion.
    pub applicable_count: u32,
    /// Fully compliant items.
    pub compliant_count: u32,
}

/// Score a set of checklist items.
///
/// `NotApplicable` items never reach numerator or denominator; partial
/// compliance weighs half. An empty applicable set scores 0.
pub fn score_checklist<'a, I>(items: I) -> ComplianceScore
where
    I: IntoIterator<Item = &'a ChecklistItem>,
{
    let mut weight_sum = 0.0f64;
    let mut applicable = 0u32;
    let mut compliant = 0u32;

    for item in items {
        let Some(weight) = item.status.weight() else {
            continue;
        };
        weight_sum += weight;
        applicable += 1;
        if item.status == ComplianceStatus::Compliant {
            compliant += 1;
        }
    }

    if applicable == 0 {
        return ComplianceScore::default();
    }

    let percentage = (weight_sum / f64::from(applicable) * 100.0).round() as u32;
    ComplianceScore {
        percentage,
        applicable_count: applicable,
        compliant_count: compliant,
    }
}

/// Per-project compliance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCompliance {
    pub project_id: String,
    pub project_name: String,
    pub score: ComplianceScore,
}

/// Score every project's own checklist, in snapshot order.
pub fn project_compliance(projects: &[Project]) -> Vec<ProjectCompliance> {
    projects
        .iter()
        .map(|project| ProjectCompliance {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            score: score_checklist(&project.checklist),
        })
        .collect()
}

/// Overall score across every checklist item of every project.
pub fn overall_compliance(projects: &[Project]) -> ComplianceScore {
    score_checklist(projects.iter().flat_map(|p| &p.checklist))
}

/// A project with checklist items past due and still unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueRow {
    pub project_id: String,
    pub overdue_count: u32,
}

/// Count overdue items per project. Projects with nothing overdue emit
/// no row.
pub fn overdue_items(projects: &[Project], evaluated_at: NaiveDate) -> Vec<OverdueRow> {
    let mut rows = Vec::new();
    for project in projects {
        let overdue = project
            .checklist
            .iter()
            .filter(|item| is_overdue(item, evaluated_at))
            .count() as u32;
        if overdue > 0 {
            rows.push(OverdueRow {
                project_id: project.id.clone(),
                overdue_count: overdue,
            });
        }
    }
    rows
}

/// Past due at `evaluated_at` and neither resolved (`Compliant`) nor
/// exempt (`NotApplicable`). Items without a due date are never overdue.
fn is_overdue(item: &ChecklistItem, evaluated_at: NaiveDate) -> bool {
    let past_due = item.due_date.is_some_and(|due| due < evaluated_at);
    past_due
        && !matches!(
            item.status,
            ComplianceStatus::Compliant | ComplianceStatus::NotApplicable
        )
}
