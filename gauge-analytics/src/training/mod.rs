//! Training effectiveness — issue load vs completion rate per
//! department.

use gauge_core::model::TrainingStatus;
use gauge_core::types::collections::FxHashMap;
use serde::Serialize;

use crate::normalize::SnapshotIndex;

/// Issue load and training completion for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingEffectivenessRow {
    pub department_id: String,
    /// CAPA reports and risks whose assignee/owner is a member.
    pub issue_count: u32,
    pub assigned_count: u32,
    pub completed_count: u32,
    /// round(completed / assigned × 100); 0 when nothing is assigned.
    pub completion_rate: u32,
}

/// Correlate per-department issue load with training completion.
///
/// A department drops out only when both issue count and completion rate
/// are zero; a zero in a single dimension is signal and stays. Issues
/// whose assignee/owner cannot be resolved to a department contribute
/// nowhere.
pub fn training_effectiveness(index: &SnapshotIndex<'_>) -> Vec<TrainingEffectivenessRow> {
    let snapshot = index.snapshot();

    let mut issues_by_department: FxHashMap<&str, u32> = FxHashMap::default();
    let mut tally = |user_id: Option<&str>| {
        if let Some(department) = user_id.and_then(|id| index.department_of_user(id)) {
            *issues_by_department.entry(department.id.as_str()).or_insert(0) += 1;
        }
    };
    for project in &snapshot.projects {
        for capa in &project.capa_reports {
            tally(capa.assignee_id.as_deref());
        }
    }
    for risk in &snapshot.risks {
        tally(risk.owner_id.as_deref());
    }

    let mut rows = Vec::new();
    for department in &snapshot.departments {
        let issue_count = issues_by_department
            .get(department.id.as_str())
            .copied()
            .unwrap_or(0);

        let mut assigned = 0u32;
        let mut completed = 0u32;
        for user in index.members(&department.id) {
            for assignment in &user.training_assignments {
                assigned += 1;
                let done = index
                    .training_record(&user.id, &assignment.training_id)
                    .is_some_and(|record| record.status == TrainingStatus::Completed);
                if done {
                    completed += 1;
                }
            }
        }

        let completion_rate = if assigned == 0 {
            0
        } else {
            (f64::from(completed) / f64::from(assigned) * 100.0).round() as u32
        };

        // Both-zero rows are noise; a zero in one dimension is kept.
        if issue_count == 0 && completion_rate == 0 {
            continue;
        }

        rows.push(TrainingEffectivenessRow {
            department_id: department.id.clone(),
            issue_count,
            assigned_count: assigned,
            completed_count: completed,
            completion_rate,
        });
    }

    rows
}
