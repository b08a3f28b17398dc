//! Lecturer Page Configs
//!
//! Table-control configs for the lists a lecturer works from: their assigned
//! mentees and those mentees' KPI records. Lecturer routes are guarded with
//! `allowed = [AppRole::Lecturer, AppRole::Staff]` since staff retain oversight
//! of every lecturer view.

use crate::table::{
    ColumnConfig, FilterConfig, FilterOption, QueryConfig, SortOption, TableControlConfig,
};

/// mentees_table
///
/// A lecturer's mentee listing. Status distinguishes running mentorships from
/// ones whose intake has ended.
pub fn mentees_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search mentees by name or intake...",
            &["student_name", "intake"],
            &["student_name"],
        ),
        filters: vec![
            FilterConfig::new(
                "status",
                "Status",
                "All statuses",
                vec![
                    FilterOption::new("Active", "active"),
                    FilterOption::new("Completed", "completed"),
                ],
            ),
            FilterConfig::new(
                "intake",
                "Intake",
                "All intakes",
                vec![
                    FilterOption::new("September 2025", "2025-SEP"),
                    FilterOption::new("January 2026", "2026-JAN"),
                    FilterOption::new("May 2026", "2026-MAY"),
                ],
            ),
        ],
        sort_options: vec![
            SortOption::new("student_name", "Name"),
            SortOption::new("assigned_at", "Assigned"),
        ],
        columns: vec![
            ColumnConfig::new("student_name", "Student", false),
            ColumnConfig::new("intake", "Intake", true),
            ColumnConfig::new("status", "Status", true),
            ColumnConfig::new("assigned_at", "Assigned", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}

/// kpi_records_table
///
/// KPI records across a lecturer's mentees. The status values mirror the
/// classifications the backend derives from each intake's KPI targets.
pub fn kpi_records_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search records by student or metric...",
            &["student_name", "metric"],
            &["student_name"],
        ),
        filters: vec![
            FilterConfig::new(
                "metric",
                "Metric",
                "All metrics",
                vec![
                    FilterOption::new("Attendance", "attendance"),
                    FilterOption::new("Challenge points", "challenge-points"),
                    FilterOption::new("GitHub commits", "github-commits"),
                ],
            ),
            FilterConfig::new(
                "status",
                "Status",
                "All statuses",
                vec![
                    FilterOption::new("On track", "on-track"),
                    FilterOption::new("At risk", "at-risk"),
                    FilterOption::new("Off track", "off-track"),
                ],
            ),
        ],
        sort_options: vec![
            SortOption::new("student_name", "Student"),
            SortOption::new("score", "Score"),
            SortOption::new("recorded_at", "Recorded"),
        ],
        columns: vec![
            ColumnConfig::new("student_name", "Student", false),
            ColumnConfig::new("metric", "Metric", true),
            ColumnConfig::new("score", "Score", true),
            ColumnConfig::new("status", "Status", true),
            ColumnConfig::new("recorded_at", "Recorded", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}
