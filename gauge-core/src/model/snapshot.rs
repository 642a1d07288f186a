//! The immutable input snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

use super::{Competency, Department, Project, Risk, TrainingProgram, TrainingRecord, User};

/// Everything the aggregation engine reads, captured at one point in
/// time.
///
/// Supplied by the persistence collaborator per computation. The engine
/// never mutates it and never persists anything derived from it; every
/// view-model is recomputed from the snapshot plus the current drill-down
/// selection. Arbitration between stale and fresh snapshots is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub projects: Vec<Project>,
    pub risks: Vec<Risk>,
    pub users: Vec<User>,
    pub departments: Vec<Department>,
    pub competencies: Vec<Competency>,
    pub training_programs: Vec<TrainingProgram>,
    /// user id → training id → record.
    #[serde(default)]
    pub training_status: FxHashMap<String, FxHashMap<String, TrainingRecord>>,
    /// Evaluation time for expiry and overdue checks.
    pub evaluated_at: NaiveDate,
}
