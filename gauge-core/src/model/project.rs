//! Project, checklist, and CAPA records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Compliance evaluation of a single checklist item against a standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
    /// Excluded from every compliance ratio — numerator and denominator.
    NotApplicable,
}

impl ComplianceStatus {
    /// Scoring weight. `None` means the item carries no weight at all;
    /// callers must leave it out of the denominator too.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Compliant => Some(1.0),
            Self::PartiallyCompliant => Some(0.5),
            Self::NonCompliant => Some(0.0),
            Self::NotApplicable => None,
        }
    }

    /// Status name as a raw key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::PartiallyCompliant => "partially_compliant",
            Self::NonCompliant => "non_compliant",
            Self::NotApplicable => "not_applicable",
        }
    }
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    /// Status name as a raw key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
        }
    }
}

/// A single checklist entry evaluated against a regulatory or internal
/// standard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub standard_id: String,
    pub status: ComplianceStatus,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Follow-up verification on a corrective/preventive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivenessCheck {
    pub required: bool,
    pub completed: bool,
}

/// A corrective/preventive action report attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapaReport {
    pub id: String,
    pub description: String,
    /// Underlying cause class; absent reports never populate a
    /// root-cause bucket.
    #[serde(default)]
    pub root_cause: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub effectiveness_check: Option<EffectivenessCheck>,
}

/// A quality/compliance project with its checklist and CAPA reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    /// Completion progress, 0–100.
    pub progress: f64,
    pub status: ProjectStatus,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub capa_reports: Vec<CapaReport>,
}
