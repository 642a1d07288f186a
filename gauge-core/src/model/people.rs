//! Users, departments, and competencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A competency held by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCompetency {
    pub competency_id: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl UserCompetency {
    /// Currently valid iff there is no expiry or the expiry is strictly
    /// after `evaluated_at`. An expiry on the evaluation day is already
    /// expired.
    pub fn is_valid_at(&self, evaluated_at: NaiveDate) -> bool {
        match self.expiry_date {
            None => true,
            Some(expiry) => expiry > evaluated_at,
        }
    }
}

/// A document acknowledgement record for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub document_id: String,
    #[serde(default)]
    pub acknowledged_date: Option<NaiveDate>,
}

/// A dashboard user belonging to exactly one department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub department_id: String,
    #[serde(default)]
    pub competencies: Vec<UserCompetency>,
    #[serde(default)]
    pub training_assignments: Vec<super::TrainingAssignment>,
    #[serde(default)]
    pub acknowledgements: Vec<Acknowledgement>,
}

/// An organizational unit with required competencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    /// Raw name key; localization happens at the presentation boundary.
    pub name: String,
    #[serde(default)]
    pub required_competencies: Vec<String>,
}

/// A competency definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competency {
    pub id: String,
    pub name: String,
}
