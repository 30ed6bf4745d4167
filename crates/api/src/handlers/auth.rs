//! Handlers for the `/auth` resource (identity-provider callback, logout).
//!
//! Identity verification happens at the external SSO provider. The callback
//! receives the verified identity payload, syncs the profile row, and mints
//! the session token used by every authenticated endpoint.

use axum::extract::State;
use axum::Json;
use opencourse_db::models::user::{UpsertUser, UserResponse};
use opencourse_db::repositories::{AttendanceRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/callback`: the verified identity payload
/// from the SSO exchange.
#[derive(Debug, Deserialize)]
pub struct IdentityCallback {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct AuthCallbackResponse {
    pub token: String,
    /// Whether the client should route to the catalog (`true`) or the
    /// onboarding wizard (`false`).
    pub onboarded: bool,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/callback
///
/// Sync the signed-in identity into the profile store and issue a session
/// token. Creates the profile row on first sign-in; refreshes name, photo,
/// and attendance verification on every subsequent one.
pub async fn callback(
    State(state): State<AppState>,
    Json(input): Json<IdentityCallback>,
) -> AppResult<Json<AuthCallbackResponse>> {
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("Email is missing".into()));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is missing".into()));
    }

    // Attendance verification is derived, not client-supplied.
    let attendance_verified = AttendanceRepo::is_verified(&state.pool, &input.email).await?;

    let user = UserRepo::upsert_on_sign_in(
        &state.pool,
        &UpsertUser {
            email: input.email.clone(),
            name: input.name,
            profile_picture: input.picture,
            attendance_verified,
        },
    )
    .await?;

    let token = generate_session_token(&user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(email = %user.email, onboarded = user.onboarded, "User signed in");

    Ok(Json(AuthCallbackResponse {
        token,
        onboarded: user.onboarded,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/logout
///
/// Sessions are stateless JWTs, so logout is an acknowledgement; the client
/// discards its token.
pub async fn logout() -> Json<SuccessResponse> {
    Json(SuccessResponse { success: true })
}
