//! Dashboard assembly benchmarks.
//!
//! Benchmarks full view-model derivation over synthetic snapshots of
//! increasing size. Run with: cargo bench -p gauge-analytics --bench dashboard_bench

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gauge_analytics::issues::drilldown::DrilldownState;
use gauge_analytics::views::build_dashboard;
use gauge_core::config::AnalyticsConfig;
use gauge_core::model::{
    CapaReport, ChecklistItem, ComplianceStatus, DashboardSnapshot, Department, Project,
    ProjectStatus, Risk, User, UserCompetency,
};
use gauge_core::types::collections::FxHashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const STATUSES: [ComplianceStatus; 4] = [
    ComplianceStatus::Compliant,
    ComplianceStatus::PartiallyCompliant,
    ComplianceStatus::NonCompliant,
    ComplianceStatus::NotApplicable,
];

const CAUSES: [&str; 5] = ["Process", "Equipment", "Training", "Supplier", "Documentation"];

/// Build a snapshot with `project_count` projects, each with a 20-item
/// checklist and 3 CAPA reports, plus proportional users and risks.
fn synthetic_snapshot(project_count: usize) -> DashboardSnapshot {
    let departments: Vec<Department> = (0..8)
        .map(|d| Department {
            id: format!("dept-{d}"),
            name: format!("Department {d}"),
            required_competencies: vec!["auditor".to_string(), "gmp".to_string()],
        })
        .collect();

    let users: Vec<User> = (0..project_count * 2)
        .map(|u| User {
            id: format!("user-{u}"),
            name: format!("User {u}"),
            department_id: format!("dept-{}", u % 8),
            competencies: vec![UserCompetency {
                competency_id: "auditor".to_string(),
                issue_date: date(2022, 1, 1),
                expiry_date: (u % 3 == 0).then(|| date(2023, 1, 1)),
            }],
            training_assignments: Vec::new(),
            acknowledgements: Vec::new(),
        })
        .collect();

    let projects: Vec<Project> = (0..project_count)
        .map(|p| Project {
            id: format!("proj-{p}"),
            name: format!("Project {p}"),
            start_date: date(2023, (p % 12) as u32 + 1, 1),
            progress: (p % 101) as f64,
            status: ProjectStatus::Active,
            checklist: (0..20)
                .map(|i| ChecklistItem {
                    id: format!("item-{p}-{i}"),
                    standard_id: format!("std-{}", i % 6),
                    status: STATUSES[(p + i) % 4],
                    assignee_id: Some(format!("user-{}", (p * 2) % (project_count.max(1) * 2))),
                    due_date: Some(date(2024, (i % 12) as u32 + 1, 15)),
                })
                .collect(),
            capa_reports: (0..3)
                .map(|i| CapaReport {
                    id: format!("capa-{p}-{i}"),
                    description: format!("CAPA {p}-{i}"),
                    root_cause: Some(CAUSES[(p + i) % 5].to_string()),
                    assignee_id: Some(format!("user-{}", p * 2)),
                    effectiveness_check: None,
                })
                .collect(),
        })
        .collect();

    let risks: Vec<Risk> = (0..project_count)
        .map(|r| Risk {
            id: format!("risk-{r}"),
            title: format!("Risk {r}"),
            root_cause: Some(CAUSES[r % 5].to_string()),
            owner_id: Some(format!("user-{r}")),
        })
        .collect();

    DashboardSnapshot {
        projects,
        risks,
        users,
        departments,
        competencies: Vec::new(),
        training_programs: Vec::new(),
        training_status: FxHashMap::default(),
        evaluated_at: date(2024, 6, 1),
    }
}

fn dashboard_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_build");
    group.sample_size(20);

    for size in [10, 100, 500] {
        let snapshot = synthetic_snapshot(size);
        let config = AnalyticsConfig::default();
        let drilldown = DrilldownState::new();

        group.bench_with_input(BenchmarkId::new("projects", size), &size, |b, _| {
            b.iter(|| build_dashboard(&snapshot, &config, &drilldown));
        });
    }
    group.finish();
}

criterion_group!(benches, dashboard_build);
criterion_main!(benches);
