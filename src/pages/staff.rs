//! Staff Page Configs
//!
//! Table-control configs for the lists staff administer. Staff routes are
//! guarded with `allowed = [AppRole::Staff]`; these configs only describe how
//! each list searches, filters, sorts, and lays out its columns.
//!
//! Convention shared by every config here: the identity column (name, title,
//! code) and the actions column are non-hideable, everything else can be
//! toggled out of view on narrow screens.

use crate::table::{
    ColumnConfig, FilterConfig, FilterOption, QueryConfig, SortOption, TableControlConfig,
};

/// lecturers_table
///
/// GET-equivalent of the staff lecturers listing. Mobile search drops to the
/// name column only; desktop also matches email and department.
pub fn lecturers_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search lecturers by name, email or department...",
            &["name", "email", "department"],
            &["name"],
        ),
        filters: vec![FilterConfig::new(
            "department",
            "Department",
            "All departments",
            vec![
                FilterOption::new("Computing", "Computing"),
                FilterOption::new("Engineering", "Engineering"),
                FilterOption::new("Business", "Business"),
            ],
        )],
        sort_options: vec![
            SortOption::new("name", "Name"),
            SortOption::new("mentee_count", "Mentees"),
            SortOption::new("created_at", "Date added"),
        ],
        columns: vec![
            ColumnConfig::new("name", "Name", false),
            ColumnConfig::new("email", "Email", true),
            ColumnConfig::new("department", "Department", true),
            ColumnConfig::new("mentee_count", "Mentees", true),
            ColumnConfig::new("created_at", "Added", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}

/// students_table
///
/// The staff students listing. The intake filter uses the cohort codes the
/// backend issues; the mentor column resolves to a missing cell until staff
/// assign a mentor, so unassigned students sort last under the mentor sort.
pub fn students_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search students by name, email or intake...",
            &["name", "email", "intake"],
            &["name"],
        ),
        filters: vec![FilterConfig::new(
            "intake",
            "Intake",
            "All intakes",
            vec![
                FilterOption::new("September 2025", "2025-SEP"),
                FilterOption::new("January 2026", "2026-JAN"),
                FilterOption::new("May 2026", "2026-MAY"),
            ],
        )],
        sort_options: vec![
            SortOption::new("name", "Name"),
            SortOption::new("intake", "Intake"),
            SortOption::new("mentor", "Mentor"),
            SortOption::new("created_at", "Date added"),
        ],
        columns: vec![
            ColumnConfig::new("name", "Name", false),
            ColumnConfig::new("email", "Email", true),
            ColumnConfig::new("intake", "Intake", true),
            ColumnConfig::new("mentor", "Mentor", true),
            ColumnConfig::new("created_at", "Added", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}

/// The staff intakes listing. Few enough rows that no filter dropdowns are
/// offered; search on the cohort code covers it.
pub fn intakes_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new("Search intakes by code...", &["code"], &["code"]),
        filters: vec![],
        sort_options: vec![
            SortOption::new("code", "Code"),
            SortOption::new("start_date", "Start date"),
            SortOption::new("student_count", "Students"),
        ],
        columns: vec![
            ColumnConfig::new("code", "Code", false),
            ColumnConfig::new("start_date", "Starts", true),
            ColumnConfig::new("end_date", "Ends", true),
            ColumnConfig::new("student_count", "Students", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}

/// challenges_table
///
/// The staff challenges listing. Categories mirror the challenge tracks the
/// KPI scheme awards points for.
pub fn challenges_table() -> TableControlConfig {
    TableControlConfig {
        query: QueryConfig::new(
            "Search challenges by title or category...",
            &["title", "category"],
            &["title"],
        ),
        filters: vec![FilterConfig::new(
            "category",
            "Category",
            "All categories",
            vec![
                FilterOption::new("Technical", "technical"),
                FilterOption::new("Community", "community"),
                FilterOption::new("Professional", "professional"),
            ],
        )],
        sort_options: vec![
            SortOption::new("title", "Title"),
            SortOption::new("points", "Points"),
            SortOption::new("due_date", "Due date"),
        ],
        columns: vec![
            ColumnConfig::new("title", "Title", false),
            ColumnConfig::new("category", "Category", true),
            ColumnConfig::new("points", "Points", true),
            ColumnConfig::new("due_date", "Due", true),
            ColumnConfig::new("actions", "Actions", false),
        ],
    }
}
