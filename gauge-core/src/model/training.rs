//! Training programs, assignments, and per-user status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A training program definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub id: String,
    /// Raw title key; localization happens at the presentation boundary.
    pub title: String,
}

/// A training assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingAssignment {
    pub training_id: String,
    pub assigned_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Progress state of one user on one training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

impl TrainingStatus {
    /// Status name as a raw key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

/// Per-user record for one training id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub status: TrainingStatus,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub certificate_id: Option<String>,
}
