//! Student profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use opencourse_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Enumerated columns (branch, semester) are kept as their database string
/// form here; parse with the `opencourse_core::catalog` enums when rule
/// logic needs them.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub profile_picture: Option<String>,
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub onboarding_step: i32,
    pub onboarded: bool,
    pub attendance_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sanitized profile projection for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub semester: Option<String>,
    pub onboarded: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            semester: user.semester.clone(),
            onboarded: user.onboarded,
        }
    }
}

/// DTO for the sign-in upsert. Built from the identity provider's payload
/// plus the derived attendance verification flag.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUser {
    pub email: String,
    pub name: String,
    pub profile_picture: Option<String>,
    pub attendance_verified: bool,
}

/// Validated academic details persisted when the wizard advances past
/// step 1. Enum fields have already passed membership validation.
#[derive(Debug, Clone)]
pub struct AcademicDetails {
    pub roll_number: String,
    pub branch: String,
    pub semester: String,
    pub academic_year: String,
}
