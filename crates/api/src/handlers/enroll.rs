//! Handler for the enrollment commit: the final wizard submission.
//!
//! The whole batch is validated before anything touches the database:
//! first each item's shape in array order (the first offending field is
//! reported), then the cross-item selection rules against the user's
//! semester. Only a fully valid batch reaches the single commit
//! transaction.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opencourse_core::catalog::{CourseCategory, CourseMode, Semester};
use opencourse_core::enrollment::{validate_selection, SelectionItem};
use opencourse_core::error::CoreError;
use opencourse_db::models::enrollment::{Enrollment, NewEnrollment};
use opencourse_db::repositories::{EnrollmentRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OnboardedUser};
use crate::response::StatusResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /enroll`.
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub courses: Option<Vec<CourseItem>>,
}

/// One course in the submitted batch. Every field is optional at the wire
/// level so missing fields produce field-specific messages instead of a
/// generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct CourseItem {
    pub email: Option<String>,
    pub course_id: Option<String>,
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub total_hours: Option<serde_json::Value>,
    pub enrolled_semester: Option<String>,
    pub enrolled_academic_year: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/enroll
///
/// Validate and commit the full course selection. All-or-nothing: a batch
/// that fails any check writes zero rows.
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<EnrollRequest>,
) -> AppResult<Response> {
    let courses = match input.courses {
        Some(c) if !c.is_empty() => c,
        _ => return Ok(rejection("Invalid courses data")),
    };

    let user = UserRepo::find_by_email(&state.pool, &auth.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    // The rule engine runs against the profile's semester, not whatever
    // the client put on the items.
    let semester = match user.semester.as_deref() {
        Some(s) => Semester::from_str_db(s)?,
        None => {
            return Ok(rejection(
                "Academic details must be submitted before enrolling",
            ))
        }
    };

    // Shape validation in array order; the first offending field wins.
    let mut selection = Vec::with_capacity(courses.len());
    let mut rows = Vec::with_capacity(courses.len());
    for item in &courses {
        match validate_course_item(item, &auth.email) {
            Ok((sel, row)) => {
                selection.push(sel);
                rows.push(row);
            }
            Err(message) => return Ok(rejection(message)),
        }
    }

    if let Err(err) = validate_selection(semester, &selection) {
        let message = match err {
            CoreError::Validation(msg) => msg,
            other => return Err(AppError::Core(other)),
        };
        return Ok(rejection(&message));
    }

    if let Err(err) = EnrollmentRepo::enroll_all(&state.pool, &auth.email, &rows).await {
        tracing::error!(email = %auth.email, error = %err, "Enrollment commit failed");
        return Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusResponse {
                success: false,
                message: "Enrollment failed due to a database error".to_string(),
            }),
        )
            .into_response());
    }

    Ok(Json(StatusResponse {
        success: true,
        message: "Enrollment successful".to_string(),
    })
    .into_response())
}

/// GET /api/v1/enrollments
///
/// The committed enrollment rows for the signed-in user, oldest first.
/// Requires completed onboarding; the extractor enforces the gate.
pub async fn list_enrollments(
    State(state): State<AppState>,
    onboarded: OnboardedUser,
) -> AppResult<Json<Vec<Enrollment>>> {
    let rows = EnrollmentRepo::list_for_email(&state.pool, &onboarded.user.email).await?;
    Ok(Json(rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 400 `{ success: false, message }` rejection body.
fn rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(StatusResponse {
            success: false,
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Validate one submitted course item, producing the rule-engine view and
/// the row to insert. Checks run in a fixed order and the first failure's
/// message is returned.
fn validate_course_item(
    item: &CourseItem,
    session_email: &str,
) -> Result<(SelectionItem, NewEnrollment), &'static str> {
    let email = match item.email.as_deref() {
        Some(e) if !e.trim().is_empty() => e,
        _ => return Err("Email is missing"),
    };
    if email != session_email {
        return Err("Email does not match the signed-in user");
    }

    let course_id = match item.course_id.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err("Course ID is missing"),
    };

    let mode_str = match item.mode.as_deref() {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err("Mode is missing"),
    };

    let category_str = match item.category.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err("Type is missing"),
    };

    let enrolled_semester = match item.enrolled_semester.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err("Enrolled semester is missing"),
    };

    let enrolled_academic_year = match item.enrolled_academic_year.as_deref() {
        Some(y) if !y.trim().is_empty() => y,
        _ => return Err("Enrolled academic year is missing"),
    };

    let mode = CourseMode::from_str_db(mode_str).map_err(|_| "Invalid mode value")?;
    let category = CourseCategory::from_str_db(category_str).map_err(|_| "Invalid type value")?;

    // Online courses must declare a positive numeric hour count.
    let hours = match mode {
        CourseMode::Online => {
            let h = item
                .total_hours
                .as_ref()
                .and_then(|v| v.as_i64())
                .filter(|&h| h > 0 && h <= i64::from(i32::MAX))
                .ok_or("Invalid total hours for online course")?;
            Some(h as i32)
        }
        CourseMode::Offline => None,
    };

    let selection = SelectionItem {
        course_id: course_id.to_string(),
        mode,
        category,
        hours,
    };
    let row = NewEnrollment {
        email: email.to_string(),
        course_id: course_id.to_string(),
        total_hours: hours,
        mode: mode.as_str().to_string(),
        category: category.as_str().to_string(),
        enrolled_semester: enrolled_semester.to_string(),
        enrolled_academic_year: enrolled_academic_year.to_string(),
    };
    Ok((selection, row))
}
