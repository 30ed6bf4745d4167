//! Shared response payload types for API handlers.
//!
//! Mutating endpoints answer with a `{ "success": .. }` shape, optionally
//! carrying a message or a per-field error list. Use these types instead of
//! ad-hoc `serde_json::json!` so the shapes stay consistent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `{ "success": bool, "message": .. }` -- outcome of the enrollment commit.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// Bare `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `{ "step": n }` -- the persisted wizard step.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: i32,
}

/// `{ "attendanceVerified": bool }` -- attendance gate for the wizard.
#[derive(Debug, Serialize)]
pub struct AttendanceResponse {
    #[serde(rename = "attendanceVerified")]
    pub attendance_verified: bool,
}

/// One failed field in a profile submission.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 400 body listing every failed field of a profile submission.
#[derive(Debug, Serialize)]
pub struct ValidationFailure {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Flatten `validator` output into the `{ success, errors }` shape.
    /// Every failed field is reported, not just the first.
    pub fn from_validator(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}")),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self {
            success: false,
            errors: fields,
        }
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, axum::Json(self)).into_response()
    }
}
