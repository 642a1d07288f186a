//! Competency coverage and gap per department.

use chrono::NaiveDate;
use serde::Serialize;

use crate::normalize::SnapshotIndex;

/// Coverage of one required competency inside one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub department_id: String,
    pub competency_id: String,
    pub compliant_count: u32,
    pub total_count: u32,
}

impl CoverageRow {
    /// Members still missing a currently-valid competency. Non-zero is a
    /// deficit, distinct from a fully covered row.
    pub fn gap(&self) -> u32 {
        self.total_count - self.compliant_count
    }
}

/// Compute coverage rows for every (department, required competency)
/// pair with at least one member.
///
/// A member counts as compliant when it holds an entry for the
/// competency that is valid at `evaluated_at` (strict-future expiry).
/// Departments with zero members or zero required competencies emit
/// nothing — absent, not zero-rowed.
pub fn competency_coverage(index: &SnapshotIndex<'_>, evaluated_at: NaiveDate) -> Vec<CoverageRow> {
    let mut rows = Vec::new();

    for department in &index.snapshot().departments {
        let members = index.members(&department.id);
        if members.is_empty() {
            continue;
        }

        for competency_id in &department.required_competencies {
            let compliant = members
                .iter()
                .filter(|user| {
                    user.competencies
                        .iter()
                        .any(|c| c.competency_id == *competency_id && c.is_valid_at(evaluated_at))
                })
                .count() as u32;

            rows.push(CoverageRow {
                department_id: department.id.clone(),
                competency_id: competency_id.clone(),
                compliant_count: compliant,
                total_count: members.len() as u32,
            });
        }
    }

    rows
}
