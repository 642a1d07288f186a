//! Organizational risk records.

use serde::{Deserialize, Serialize};

/// A risk register entry. Unlike CAPA reports, risks belong to no
/// project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub title: String,
    /// Underlying cause class; absent risks never populate a root-cause
    /// bucket.
    #[serde(default)]
    pub root_cause: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}
