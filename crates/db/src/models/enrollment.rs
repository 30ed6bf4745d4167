//! Enrollment entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use opencourse_core::types::{DbId, Timestamp};

/// A row from the `enrollments` table. Written exactly once per selected
/// course during the commit step; never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub email: String,
    pub course_id: String,
    pub total_hours: Option<i32>,
    pub mode: String,
    #[serde(rename = "type")]
    pub category: String,
    pub enrolled_semester: String,
    pub enrolled_academic_year: String,
    pub created_at: Timestamp,
}

/// DTO for one enrollment row in a commit batch. All fields have already
/// passed the committer's shape validation.
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub email: String,
    pub course_id: String,
    pub total_hours: Option<i32>,
    pub mode: String,
    pub category: String,
    pub enrolled_semester: String,
    pub enrolled_academic_year: String,
}
