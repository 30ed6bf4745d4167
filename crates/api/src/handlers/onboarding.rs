//! Handlers for the `/onboarding` resource: wizard state, academic details,
//! attendance gate, and enrollment history for the selection steps.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opencourse_core::academic_year;
use opencourse_core::catalog::{Branch, Semester};
use opencourse_core::error::CoreError;
use opencourse_core::wizard;
use opencourse_db::models::user::AcademicDetails;
use opencourse_db::repositories::{AttendanceRepo, EnrollmentRepo, UserRepo};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{AttendanceResponse, StepResponse, SuccessResponse, ValidationFailure};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /onboarding/profile`: the academic details
/// collected by wizard step 1.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, message = "Roll number is missing"))]
    pub roll_number: String,
    #[validate(custom(function = validate_branch))]
    pub branch: String,
    #[validate(custom(function = validate_semester))]
    pub semester: String,
}

/// Request body for `POST /onboarding/step`.
#[derive(Debug, Deserialize)]
pub struct StepUpdateRequest {
    pub step: u8,
}

fn validate_branch(value: &str) -> Result<(), ValidationError> {
    Branch::from_str_db(value).map_err(|_| {
        ValidationError::new("branch").with_message(
            format!(
                "Invalid branch value. Must be one of: {}",
                Branch::ALL.join(", ")
            )
            .into(),
        )
    })?;
    Ok(())
}

fn validate_semester(value: &str) -> Result<(), ValidationError> {
    Semester::from_str_db(value).map_err(|_| {
        ValidationError::new("semester").with_message(
            format!(
                "Invalid semester value. Must be one of: {}",
                Semester::ALL.join(", ")
            )
            .into(),
        )
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/onboarding/step
///
/// The persisted wizard step for the authenticated user, defaulting to 1
/// when no progress has been recorded yet.
pub async fn get_step(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<StepResponse>> {
    let step = UserRepo::onboarding_step(&state.pool, &auth.email)
        .await?
        .unwrap_or(1);
    Ok(Json(StepResponse { step }))
}

/// POST /api/v1/onboarding/step
///
/// Persist a wizard step transition. Only one-step moves between visible
/// steps are accepted; the hidden OEHM step is skipped over in the
/// terminal semester.
pub async fn set_step(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<StepUpdateRequest>,
) -> AppResult<Json<StepResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &auth.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let semester = match user.semester.as_deref() {
        Some(s) => Some(Semester::from_str_db(s)?),
        None => None,
    };
    let current = u8::try_from(user.onboarding_step)
        .map_err(|_| AppError::InternalError("Stored onboarding step is out of range".into()))?;

    wizard::validate_step_transition(current, input.step, semester)?;

    UserRepo::set_onboarding_step(&state.pool, &auth.email, i32::from(input.step)).await?;

    tracing::info!(email = %auth.email, from = current, to = input.step, "Wizard step updated");

    Ok(Json(StepResponse {
        step: i32::from(input.step),
    }))
}

/// POST /api/v1/onboarding/profile
///
/// Persist the academic details from wizard step 1 and advance to step 2.
/// Rejected submissions report every failed field, not just the first.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ProfileUpdateRequest>,
) -> Result<Response, AppError> {
    if let Err(errors) = input.validate() {
        return Ok(ValidationFailure::from_validator(&errors).into_response());
    }

    // The academic year is derived server-side from the clock, never
    // taken from the client.
    let details = AcademicDetails {
        roll_number: input.roll_number,
        branch: input.branch,
        semester: input.semester,
        academic_year: academic_year::current(),
    };

    let user = UserRepo::update_academic_details(&state.pool, &auth.email, &details)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    tracing::info!(
        email = %user.email,
        branch = %details.branch,
        semester = %details.semester,
        "Academic details saved"
    );

    Ok(Json(SuccessResponse { success: true }).into_response())
}

/// GET /api/v1/onboarding/attendance
///
/// Whether an attendance record exists for the authenticated user.
pub async fn get_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<AttendanceResponse>> {
    let attendance_verified = AttendanceRepo::is_verified(&state.pool, &auth.email).await?;
    Ok(Json(AttendanceResponse {
        attendance_verified,
    }))
}

/// GET /api/v1/onboarding/previously-taken
///
/// Course ids the user has already enrolled in, so the selection steps can
/// mark them non-selectable.
pub async fn previously_taken(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<String>>> {
    let ids = EnrollmentRepo::course_ids_for_email(&state.pool, &auth.email).await?;
    Ok(Json(ids))
}
