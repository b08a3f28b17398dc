use chrono::{TimeZone, Utc};
use kpi_portal::{
    SortDirection, SortSelection, TableState, Viewport, interpret,
    models::{KpiRecord, Student},
    pages,
    table::{ColumnConfig, QueryConfig, TableControlConfig},
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

// --- Test Fixtures ---

fn student(name: &str, email: &str, intake: &str, mentor: Option<&str>) -> Student {
    Student {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        intake: intake.to_string(),
        mentor: mentor.map(|m| m.to_string()),
        created_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
    }
}

fn kpi_record(student_name: &str, metric: &str, score: f64, status: &str) -> KpiRecord {
    KpiRecord {
        id: Uuid::new_v4(),
        student_name: student_name.to_string(),
        metric: metric.to_string(),
        score,
        status: status.to_string(),
        recorded_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    }
}

fn sample_students() -> Vec<Student> {
    vec![
        student("Aisha Rahman", "aisha@portal.edu", "2025-SEP", Some("Dr. Tan")),
        student("Ben Okafor", "ben@portal.edu", "2026-JAN", None),
        student("Chloe Lim", "chloe@portal.edu", "2026-JAN", Some("Dr. Wong")),
        student("Dev Patel", "dev@portal.edu", "2025-SEP", Some("Dr. Tan")),
    ]
}

fn names<'a>(rows: &[&'a Student]) -> Vec<&'a str> {
    rows.iter().map(|s| s.name.as_str()).collect()
}

// --- Search ---

#[test]
fn empty_query_returns_all_rows_in_original_order() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let view = interpret(&config, &TableState::default(), &rows);

    assert_eq!(
        names(&view.rows),
        vec!["Aisha Rahman", "Ben Okafor", "Chloe Lim", "Dev Patel"]
    );
}

#[test]
fn query_matching_exactly_one_row_returns_that_row() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        query: "okafor".to_string(),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert_eq!(names(&view.rows), vec!["Ben Okafor"]);
}

#[test]
fn query_is_case_insensitive_and_preserves_row_order() {
    // Rows 1 and 3 both carry "amy" once lowercased; row 2 does not.
    let config = TableControlConfig {
        query: QueryConfig::new("Search...", &["name"], &["name"]),
        filters: vec![],
        sort_options: vec![],
        columns: vec![ColumnConfig::new("name", "Name", false)],
    };
    let rows = vec![
        json!({"id": 1, "name": "Amy"}),
        json!({"id": 2, "name": "Zoe"}),
        json!({"id": 3, "name": "amy"}),
    ];

    let state = TableState {
        query: "amy".to_string(),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let matched: Vec<&str> = view
        .rows
        .iter()
        .map(|r| r.get("name").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(matched, vec!["Amy", "amy"]);
}

#[test]
fn query_is_trimmed_before_matching() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        query: "  chloe  ".to_string(),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert_eq!(names(&view.rows), vec!["Chloe Lim"]);
}

#[test]
fn mobile_viewport_searches_the_mobile_column_subset_only() {
    // The students config searches email on desktop but only name on mobile.
    let config = pages::staff::students_table();
    let rows = sample_students();

    let mut state = TableState {
        query: "ben@portal.edu".to_string(),
        ..TableState::default()
    };

    state.viewport = Viewport::Desktop;
    assert_eq!(names(&interpret(&config, &state, &rows).rows), vec!["Ben Okafor"]);

    state.viewport = Viewport::Mobile;
    assert!(interpret(&config, &state, &rows).rows.is_empty());
}

// --- Filters ---

#[test]
fn active_filter_keeps_only_exact_matches() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        filters: HashMap::from([("intake".to_string(), "2026-JAN".to_string())]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert_eq!(names(&view.rows), vec!["Ben Okafor", "Chloe Lim"]);
}

#[test]
fn filter_matching_no_row_returns_empty_sequence() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        filters: HashMap::from([("intake".to_string(), "2026-MAY".to_string())]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert!(view.rows.is_empty());
}

#[test]
fn active_filters_combine_with_logical_and() {
    let config = pages::lecturer::kpi_records_table();
    let rows = vec![
        kpi_record("Aisha Rahman", "attendance", 92.0, "on-track"),
        kpi_record("Ben Okafor", "attendance", 61.0, "at-risk"),
        kpi_record("Aisha Rahman", "challenge-points", 40.0, "at-risk"),
    ];

    let state = TableState {
        filters: HashMap::from([
            ("metric".to_string(), "attendance".to_string()),
            ("status".to_string(), "at-risk".to_string()),
        ]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].student_name, "Ben Okafor");
}

#[test]
fn missing_field_never_matches_an_active_filter() {
    // Ben has no mentor; a mentor filter must not select him.
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        filters: HashMap::from([("mentor".to_string(), "Dr. Tan".to_string())]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    assert_eq!(names(&view.rows), vec!["Aisha Rahman", "Dev Patel"]);
}

// --- Sort ---

#[test]
fn numeric_ascending_sort_is_stable_across_duplicates() {
    let config = pages::lecturer::kpi_records_table();
    let rows = vec![
        kpi_record("Aisha Rahman", "attendance", 75.0, "on-track"),
        kpi_record("Ben Okafor", "attendance", 61.0, "at-risk"),
        kpi_record("Chloe Lim", "attendance", 75.0, "on-track"),
        kpi_record("Dev Patel", "attendance", 75.0, "on-track"),
    ];

    let state = TableState {
        sort: Some(SortSelection {
            column_id: "score".to_string(),
            direction: SortDirection::Ascending,
        }),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    // The three 75.0 rows must keep their original relative order after Ben.
    let ordered: Vec<&str> = view.rows.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(
        ordered,
        vec!["Ben Okafor", "Aisha Rahman", "Chloe Lim", "Dev Patel"]
    );
}

#[test]
fn descending_sort_reverses_order() {
    let config = pages::lecturer::kpi_records_table();
    let rows = vec![
        kpi_record("Aisha Rahman", "attendance", 92.0, "on-track"),
        kpi_record("Ben Okafor", "attendance", 61.0, "at-risk"),
        kpi_record("Chloe Lim", "attendance", 75.0, "on-track"),
    ];

    let state = TableState {
        sort: Some(SortSelection {
            column_id: "score".to_string(),
            direction: SortDirection::Descending,
        }),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let ordered: Vec<f64> = view.rows.iter().map(|r| r.score).collect();
    assert_eq!(ordered, vec![92.0, 75.0, 61.0]);
}

#[test]
fn date_sort_orders_rows_chronologically_in_both_directions() {
    let config = pages::lecturer::kpi_records_table();
    let mut rows = vec![
        kpi_record("Aisha Rahman", "attendance", 92.0, "on-track"),
        kpi_record("Ben Okafor", "attendance", 61.0, "at-risk"),
        kpi_record("Chloe Lim", "attendance", 75.0, "on-track"),
    ];
    // Recorded out of order: Ben earliest, Aisha latest.
    rows[0].recorded_at = Utc.with_ymd_and_hms(2026, 3, 20, 9, 0, 0).unwrap();
    rows[1].recorded_at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    rows[2].recorded_at = Utc.with_ymd_and_hms(2026, 2, 11, 9, 0, 0).unwrap();

    let mut state = TableState {
        sort: Some(SortSelection {
            column_id: "recorded_at".to_string(),
            direction: SortDirection::Ascending,
        }),
        ..TableState::default()
    };

    let view = interpret(&config, &state, &rows);
    let ordered: Vec<&str> = view.rows.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(ordered, vec!["Ben Okafor", "Chloe Lim", "Aisha Rahman"]);

    state.sort = Some(SortSelection {
        column_id: "recorded_at".to_string(),
        direction: SortDirection::Descending,
    });
    let view = interpret(&config, &state, &rows);
    let ordered: Vec<&str> = view.rows.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(ordered, vec!["Aisha Rahman", "Chloe Lim", "Ben Okafor"]);
}

#[test]
fn missing_sort_field_places_rows_last_in_both_directions() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let mut state = TableState {
        sort: Some(SortSelection {
            column_id: "mentor".to_string(),
            direction: SortDirection::Ascending,
        }),
        ..TableState::default()
    };

    let view = interpret(&config, &state, &rows);
    assert_eq!(names(&view.rows).last(), Some(&"Ben Okafor"));

    state.sort = Some(SortSelection {
        column_id: "mentor".to_string(),
        direction: SortDirection::Descending,
    });
    let view = interpret(&config, &state, &rows);
    assert_eq!(names(&view.rows).last(), Some(&"Ben Okafor"));
}

#[test]
fn mixed_type_sort_column_falls_back_to_rendered_string_order() {
    // A loosely typed payload where one column mixes numbers and text. Pairs of
    // like type keep their natural order; mixed pairs compare by rendered
    // string, so the numeric cells (digits sort before letters) lead.
    let config = TableControlConfig {
        query: QueryConfig::new("Search...", &["value"], &["value"]),
        filters: vec![],
        sort_options: vec![kpi_portal::table::SortOption::new("value", "Value")],
        columns: vec![ColumnConfig::new("value", "Value", false)],
    };
    let rows = vec![
        json!({"value": "zebra"}),
        json!({"value": 5}),
        json!({"value": "apple"}),
        json!({"value": 2}),
    ];

    let state = TableState {
        sort: Some(SortSelection {
            column_id: "value".to_string(),
            direction: SortDirection::Ascending,
        }),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let ordered: Vec<String> = view
        .rows
        .iter()
        .map(|r| match r.get("value").unwrap() {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    assert_eq!(ordered, vec!["2", "5", "apple", "zebra"]);
}

#[test]
fn no_sort_selection_preserves_data_source_order() {
    let config = pages::lecturer::kpi_records_table();
    let rows = vec![
        kpi_record("Zoe Adams", "attendance", 50.0, "off-track"),
        kpi_record("Aisha Rahman", "attendance", 92.0, "on-track"),
    ];

    let view = interpret(&config, &TableState::default(), &rows);

    assert_eq!(view.rows[0].student_name, "Zoe Adams");
    assert_eq!(view.rows[1].student_name, "Aisha Rahman");
}

// --- Column Visibility ---

#[test]
fn hiding_a_hideable_column_removes_it_from_the_view() {
    let config = pages::staff::students_table();
    let rows = sample_students();

    let state = TableState {
        hidden_columns: HashSet::from(["email".to_string(), "created_at".to_string()]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let ids: Vec<&str> = view
        .visible_columns
        .iter()
        .map(|c| c.column_id.as_str())
        .collect();
    assert_eq!(ids, vec!["name", "intake", "mentor", "actions"]);
}

#[test]
fn hiding_a_non_hideable_column_has_no_effect() {
    let config = TableControlConfig {
        query: QueryConfig::new("Search...", &["name"], &["name"]),
        filters: vec![],
        sort_options: vec![],
        columns: vec![
            ColumnConfig::new("name", "Name", false),
            ColumnConfig::new("email", "Email", true),
        ],
    };
    let rows: Vec<serde_json::Value> = vec![];

    let state = TableState {
        hidden_columns: HashSet::from(["name".to_string(), "email".to_string()]),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let ids: Vec<&str> = view
        .visible_columns
        .iter()
        .map(|c| c.column_id.as_str())
        .collect();
    // email goes, name stays.
    assert_eq!(ids, vec!["name"]);
}

#[test]
fn search_filter_and_sort_compose() {
    let config = pages::lecturer::kpi_records_table();
    let rows = vec![
        kpi_record("Aisha Rahman", "attendance", 92.0, "on-track"),
        kpi_record("Omar Rahimi", "attendance", 70.0, "on-track"),
        kpi_record("Omar Rahimi", "challenge-points", 30.0, "at-risk"),
        kpi_record("Ben Okafor", "attendance", 85.0, "on-track"),
    ];

    let state = TableState {
        query: "rah".to_string(),
        filters: HashMap::from([("metric".to_string(), "attendance".to_string())]),
        sort: Some(SortSelection {
            column_id: "score".to_string(),
            direction: SortDirection::Descending,
        }),
        ..TableState::default()
    };
    let view = interpret(&config, &state, &rows);

    let ordered: Vec<&str> = view.rows.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(ordered, vec!["Aisha Rahman", "Omar Rahimi"]);
}
