//! Entity normalization — cross-reference resolution over a snapshot.
//!
//! Aggregations never see a dangling reference: lookups go through the
//! index, and a record whose reference cannot be resolved is dropped from
//! the group that required it, never funneled into an "unknown" bucket
//! silently merged with real groups.

use gauge_core::model::{DashboardSnapshot, Department, TrainingRecord, User};
use gauge_core::types::collections::FxHashMap;

/// Borrowed lookup indexes over one snapshot.
pub struct SnapshotIndex<'a> {
    snapshot: &'a DashboardSnapshot,
    users_by_id: FxHashMap<&'a str, &'a User>,
    departments_by_id: FxHashMap<&'a str, &'a Department>,
    members_by_department: FxHashMap<&'a str, Vec<&'a User>>,
}

impl<'a> SnapshotIndex<'a> {
    /// Build indexes for `snapshot`.
    ///
    /// A user referencing an unknown department stays addressable by id
    /// (it may still be an assignee) but joins no member list, so
    /// department-scoped aggregations never see it.
    pub fn build(snapshot: &'a DashboardSnapshot) -> Self {
        let users_by_id: FxHashMap<&str, &User> = snapshot
            .users
            .iter()
            .map(|u| (u.id.as_str(), u))
            .collect();
        let departments_by_id: FxHashMap<&str, &Department> = snapshot
            .departments
            .iter()
            .map(|d| (d.id.as_str(), d))
            .collect();

        let mut members_by_department: FxHashMap<&str, Vec<&User>> = FxHashMap::default();
        for user in &snapshot.users {
            if departments_by_id.contains_key(user.department_id.as_str()) {
                members_by_department
                    .entry(user.department_id.as_str())
                    .or_default()
                    .push(user);
            } else {
                tracing::warn!(
                    user = %user.id,
                    department = %user.department_id,
                    "user references unknown department; excluded from department aggregations"
                );
            }
        }

        Self {
            snapshot,
            users_by_id,
            departments_by_id,
            members_by_department,
        }
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &'a DashboardSnapshot {
        self.snapshot
    }

    /// Resolve a user id. `None` means the referencing record is dropped
    /// from whatever grouping needed it.
    pub fn user(&self, id: &str) -> Option<&'a User> {
        self.users_by_id.get(id).copied()
    }

    /// Resolve a department id.
    pub fn department(&self, id: &str) -> Option<&'a Department> {
        self.departments_by_id.get(id).copied()
    }

    /// Members of a department, empty when unknown or memberless.
    pub fn members(&self, department_id: &str) -> &[&'a User] {
        self.members_by_department
            .get(department_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Department of an assignee/owner id; `None` when either hop fails.
    pub fn department_of_user(&self, user_id: &str) -> Option<&'a Department> {
        self.user(user_id)
            .and_then(|u| self.department(&u.department_id))
    }

    /// Training record for one user and one training id.
    pub fn training_record(&self, user_id: &str, training_id: &str) -> Option<&'a TrainingRecord> {
        self.snapshot
            .training_status
            .get(user_id)
            .and_then(|per_user| per_user.get(training_id))
    }
}
