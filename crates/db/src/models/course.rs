//! Course catalog entity models. Immutable reference data.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `courses_online` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnlineCourse {
    pub course_id: String,
    pub course_name: String,
    pub university: String,
    pub domain: String,
    pub difficulty_level: String,
    pub language: String,
    pub hours: i32,
}

/// A row from the `courses_offline` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfflineCourse {
    pub course_code: String,
    pub course_name: String,
    pub faculty_name: String,
    pub faculty_email: String,
    pub semester: String,
    pub course_type: String,
}
