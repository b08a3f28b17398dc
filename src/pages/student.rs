//! Student Page Configs
//!
//! Table-control configs for the lists a student sees over their own data.
//! Student routes are guarded with `allowed = [AppRole::Student]`; the rows are
//! already scoped to the requesting student by the backend query bindings.

use crate::table::{
    ColumnConfig, FilterConfig, FilterOption, QueryConfig, SortOption, TableControlConfig,
};

/// kpi_targets_table
///
/// The KPI targets in force for the student's intake. Read-only for students;
/// the actions column carries View only.
pub fn kpi_targets_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search targets by metric...",
            &["metric", "intake"],
            &["metric"],
        ),
        filters: vec![FilterConfig::new(
            "metric",
            "Metric",
            "All metrics",
            vec![
                FilterOption::new("Attendance", "attendance"),
                FilterOption::new("Challenge points", "challenge-points"),
                FilterOption::new("GitHub commits", "github-commits"),
            ],
        )],
        sort_options: vec![
            SortOption::new("metric", "Metric"),
            SortOption::new("target_value", "Target"),
            SortOption::new("effective_from", "Effective from"),
        ],
        columns: vec![
            ColumnConfig::new("metric", "Metric", false),
            ColumnConfig::new("target_value", "Target", true),
            ColumnConfig::new("intake", "Intake", true),
            ColumnConfig::new("effective_from", "Effective", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}

/// academic_records_table
///
/// The student's own module grades, grouped by term.
pub fn academic_records_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search records by module or term...",
            &["module_name", "term"],
            &["module_name"],
        ),
        filters: vec![
            FilterConfig::new(
                "term",
                "Term",
                "All terms",
                vec![
                    FilterOption::new("2025 Term 2", "2025-T2"),
                    FilterOption::new("2026 Term 1", "2026-T1"),
                    FilterOption::new("2026 Term 2", "2026-T2"),
                ],
            ),
            FilterConfig::new(
                "grade",
                "Grade",
                "All grades",
                vec![
                    FilterOption::new("A", "A"),
                    FilterOption::new("B", "B"),
                    FilterOption::new("C", "C"),
                    FilterOption::new("D", "D"),
                    FilterOption::new("F", "F"),
                ],
            ),
        ],
        sort_options: vec![
            SortOption::new("module_name", "Module"),
            SortOption::new("grade", "Grade"),
            SortOption::new("recorded_at", "Recorded"),
        ],
        columns: vec![
            ColumnConfig::new("module_name", "Module", false),
            ColumnConfig::new("grade", "Grade", true),
            ColumnConfig::new("term", "Term", true),
            ColumnConfig::new("recorded_at", "Recorded", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}
