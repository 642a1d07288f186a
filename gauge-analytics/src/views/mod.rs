//! View-model assembly — plain records for presentation surfaces.
//!
//! Presentation renders its own empty-state for any empty sequence; no
//! placeholder rows are emitted here. All labels and category keys are
//! raw; localization is applied downstream.

use gauge_core::config::AnalyticsConfig;
use gauge_core::model::{ComplianceStatus, DashboardSnapshot};
use serde::Serialize;

use crate::coverage::{self, CoverageRow};
use crate::issues::drilldown::DrilldownState;
use crate::issues::{self, UnifiedIssue};
use crate::normalize::SnapshotIndex;
use crate::ranking::{self, CategoryCount};
use crate::scoring::{self, ComplianceScore, OverdueRow, ProjectCompliance};
use crate::training::{self, TrainingEffectivenessRow};
use crate::trends::{self, TrendPoint};

/// Effectiveness-check completion across all CAPA reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EffectivenessSummary {
    pub required_count: u32,
    pub completed_count: u32,
    /// round(completed / required × 100); 0 when none are required.
    pub percentage: u32,
}

/// Acknowledgement coverage inside one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcknowledgementRow {
    pub department_id: String,
    pub acknowledged_count: u32,
    pub total_count: u32,
}

/// The complete dashboard view-model.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub overall_compliance: ComplianceScore,
    pub project_compliance: Vec<ProjectCompliance>,
    pub progress_trend: Vec<TrendPoint>,
    /// Standards ranked by non-compliant item count.
    pub failing_standards: Vec<CategoryCount>,
    pub issues: Vec<UnifiedIssue>,
    pub issue_categories: Vec<CategoryCount>,
    pub selected_category: Option<String>,
    /// Drill-down detail; empty until a category is chosen.
    pub selected_issues: Vec<UnifiedIssue>,
    pub coverage: Vec<CoverageRow>,
    pub training: Vec<TrainingEffectivenessRow>,
    pub effectiveness: EffectivenessSummary,
    pub status_breakdown: Vec<CategoryCount>,
    pub overdue: Vec<OverdueRow>,
    pub acknowledgements: Vec<AcknowledgementRow>,
}

/// Derive the full dashboard from one snapshot and the current
/// selection.
///
/// Pure in its inputs: identical snapshot + selection produce identical
/// output. Superseded-snapshot arbitration belongs to the caller.
pub fn build_dashboard(
    snapshot: &DashboardSnapshot,
    config: &AnalyticsConfig,
    drilldown: &DrilldownState,
) -> DashboardViewModel {
    let index = SnapshotIndex::build(snapshot);
    let top_n = config.effective_top_categories();

    let overall_compliance = scoring::overall_compliance(&snapshot.projects);
    let project_compliance = scoring::project_compliance(&snapshot.projects);

    let trend_records = snapshot
        .projects
        .iter()
        .filter(|p| match config.trend_months {
            Some(months) => trends::within_window(p.start_date, snapshot.evaluated_at, months),
            None => true,
        })
        .map(|p| (p.start_date, p.progress));
    let progress_trend = trends::monthly_average(trend_records);

    let failing_standards = ranking::rank_categories(
        snapshot
            .projects
            .iter()
            .flat_map(|p| &p.checklist)
            .filter(|item| item.status == ComplianceStatus::NonCompliant)
            .map(|item| item.standard_id.as_str()),
        top_n,
    );

    let issues = issues::unify_issues(&snapshot.projects, &snapshot.risks);
    let issue_categories = issues::root_cause_counts(&issues, top_n);
    let selected_issues: Vec<UnifiedIssue> =
        drilldown.filter(&issues).into_iter().cloned().collect();

    let coverage = coverage::competency_coverage(&index, snapshot.evaluated_at);
    let training = training::training_effectiveness(&index);
    let effectiveness = effectiveness_summary(snapshot);
    let status_breakdown = ranking::rank_categories(
        snapshot.projects.iter().map(|p| p.status.name()),
        usize::MAX, // no cutoff
    );
    let overdue = scoring::overdue_items(&snapshot.projects, snapshot.evaluated_at);
    let acknowledgements = acknowledgement_rates(&index);

    tracing::debug!(
        projects = snapshot.projects.len(),
        issues = issues.len(),
        coverage_rows = coverage.len(),
        selected = ?drilldown.selected(),
        "dashboard view-model assembled"
    );

    DashboardViewModel {
        overall_compliance,
        project_compliance,
        progress_trend,
        failing_standards,
        issues,
        issue_categories,
        selected_category: drilldown.selected().map(str::to_string),
        selected_issues,
        coverage,
        training,
        effectiveness,
        status_breakdown,
        overdue,
        acknowledgements,
    }
}

/// Completed share of required effectiveness checks.
fn effectiveness_summary(snapshot: &DashboardSnapshot) -> EffectivenessSummary {
    let mut required = 0u32;
    let mut completed = 0u32;

    for capa in snapshot.projects.iter().flat_map(|p| &p.capa_reports) {
        let Some(check) = capa.effectiveness_check else {
            continue;
        };
        if check.required {
            required += 1;
            if check.completed {
                completed += 1;
            }
        }
    }

    let percentage = if required == 0 {
        0
    } else {
        (f64::from(completed) / f64::from(required) * 100.0).round() as u32
    };

    EffectivenessSummary {
        required_count: required,
        completed_count: completed,
        percentage,
    }
}

/// Acknowledged share of member acknowledgement records, per department.
/// Departments without members or without records emit nothing.
fn acknowledgement_rates(index: &SnapshotIndex<'_>) -> Vec<AcknowledgementRow> {
    let mut rows = Vec::new();

    for department in &index.snapshot().departments {
        let members = index.members(&department.id);
        if members.is_empty() {
            continue;
        }

        let mut total = 0u32;
        let mut acknowledged = 0u32;
        for user in members {
            for ack in &user.acknowledgements {
                total += 1;
                if ack.acknowledged_date.is_some() {
                    acknowledged += 1;
                }
            }
        }

        if total == 0 {
            continue;
        }

        rows.push(AcknowledgementRow {
            department_id: department.id.clone(),
            acknowledged_count: acknowledged,
            total_count: total,
        });
    }

    rows
}
