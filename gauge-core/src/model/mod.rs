//! Domain records consumed by the aggregation engine.
//!
//! All records arrive as immutable snapshots owned by the persistence
//! collaborator; the engine reads, never mutates. Optional fields model
//! genuinely absent data and are tolerated per-field, never rejected.

pub mod people;
pub mod project;
pub mod risk;
pub mod snapshot;
pub mod training;

pub use people::{Acknowledgement, Competency, Department, User, UserCompetency};
pub use project::{
    CapaReport, ChecklistItem, ComplianceStatus, EffectivenessCheck, Project, ProjectStatus,
};
pub use risk::Risk;
pub use snapshot::DashboardSnapshot;
pub use training::{TrainingAssignment, TrainingProgram, TrainingRecord, TrainingStatus};
