use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::interpreter::{CellValue, TableRow};

// --- Core Portal Entities (as delivered by the backend API bindings) ---
//
// Each entity implements `TableRow` so its listing page can run through the
// shared table-control interpreter. The column ids matched in `cell` are the
// same ids declared in the page's `TableControlConfig`.

/// Lecturer
///
/// A teaching staff member record from the lecturers listing. Lecturers also
/// act as mentors; `mentee_count` is precomputed by the backend join.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Lecturer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub mentee_count: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl TableRow for Lecturer {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => CellValue::Text(self.name.clone()),
            "email" => CellValue::Text(self.email.clone()),
            "department" => CellValue::Text(self.department.clone()),
            "mentee_count" => CellValue::Number(self.mentee_count as f64),
            "created_at" => CellValue::Date(self.created_at),
            _ => CellValue::Missing,
        }
    }
}

/// Student
///
/// A student record from the students listing. `mentor` is absent until staff
/// assign one, which is why the column resolves to `Missing` rather than an
/// empty string: unassigned students sort after assigned ones and never match
/// a mentor filter.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // The intake cohort code, e.g. "2026-JAN".
    pub intake: String,
    pub mentor: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl TableRow for Student {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => CellValue::Text(self.name.clone()),
            "email" => CellValue::Text(self.email.clone()),
            "intake" => CellValue::Text(self.intake.clone()),
            "mentor" => self
                .mentor
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Missing),
            "created_at" => CellValue::Date(self.created_at),
            _ => CellValue::Missing,
        }
    }
}

/// An intake cohort: the admission batch students and their KPI targets are
/// grouped under.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Intake {
    pub id: Uuid,
    pub code: String,
    #[ts(type = "string")]
    pub start_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub end_date: DateTime<Utc>,
    pub student_count: i64,
}

impl TableRow for Intake {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "code" => CellValue::Text(self.code.clone()),
            "start_date" => CellValue::Date(self.start_date),
            "end_date" => CellValue::Date(self.end_date),
            "student_count" => CellValue::Number(self.student_count as f64),
            _ => CellValue::Missing,
        }
    }
}

/// A challenge students complete for KPI points.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    // Challenge track, e.g. "technical" or "community".
    pub category: String,
    pub points: i64,
    #[ts(type = "string")]
    pub due_date: DateTime<Utc>,
}

impl TableRow for Challenge {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "title" => CellValue::Text(self.title.clone()),
            "category" => CellValue::Text(self.category.clone()),
            "points" => CellValue::Number(self.points as f64),
            "due_date" => CellValue::Date(self.due_date),
            _ => CellValue::Missing,
        }
    }
}

/// KpiRecord
///
/// One measured KPI data point for a student: which metric, the score, and the
/// status classification the backend derives from the matching target.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct KpiRecord {
    pub id: Uuid,
    pub student_name: String,
    // The tracked metric, e.g. "attendance" or "challenge-points".
    pub metric: String,
    pub score: f64,
    // Derived classification: "on-track", "at-risk", "off-track".
    pub status: String,
    #[ts(type = "string")]
    pub recorded_at: DateTime<Utc>,
}

impl TableRow for KpiRecord {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "student_name" => CellValue::Text(self.student_name.clone()),
            "metric" => CellValue::Text(self.metric.clone()),
            "score" => CellValue::Number(self.score),
            "status" => CellValue::Text(self.status.clone()),
            "recorded_at" => CellValue::Date(self.recorded_at),
            _ => CellValue::Missing,
        }
    }
}

/// A per-intake KPI target: the threshold `KpiRecord` scores are classified
/// against.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct KpiTarget {
    pub id: Uuid,
    pub metric: String,
    pub target_value: f64,
    pub intake: String,
    #[ts(type = "string")]
    pub effective_from: DateTime<Utc>,
}

impl TableRow for KpiTarget {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "metric" => CellValue::Text(self.metric.clone()),
            "target_value" => CellValue::Number(self.target_value),
            "intake" => CellValue::Text(self.intake.clone()),
            "effective_from" => CellValue::Date(self.effective_from),
            _ => CellValue::Missing,
        }
    }
}

/// A module grade entry in a student's academic record.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct AcademicRecord {
    pub id: Uuid,
    pub student_name: String,
    pub module_name: String,
    pub grade: String,
    pub term: String,
    #[ts(type = "string")]
    pub recorded_at: DateTime<Utc>,
}

impl TableRow for AcademicRecord {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "student_name" => CellValue::Text(self.student_name.clone()),
            "module_name" => CellValue::Text(self.module_name.clone()),
            "grade" => CellValue::Text(self.grade.clone()),
            "term" => CellValue::Text(self.term.clone()),
            "recorded_at" => CellValue::Date(self.recorded_at),
            _ => CellValue::Missing,
        }
    }
}

/// MentorshipAssignment
///
/// One row of a lecturer's mentee listing: the student assigned to them, the
/// cohort, and the assignment status.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct MentorshipAssignment {
    pub id: Uuid,
    pub student_name: String,
    pub intake: String,
    // "active" while mentorship runs, "completed" after the intake ends.
    pub status: String,
    #[ts(type = "string")]
    pub assigned_at: DateTime<Utc>,
}

impl TableRow for MentorshipAssignment {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "student_name" => CellValue::Text(self.student_name.clone()),
            "intake" => CellValue::Text(self.intake.clone()),
            "status" => CellValue::Text(self.status.clone()),
            "assigned_at" => CellValue::Date(self.assigned_at),
            _ => CellValue::Missing,
        }
    }
}
