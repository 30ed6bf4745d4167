//! Handler for the authenticated `/user` profile read.

use axum::extract::State;
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_db::models::user::UserResponse;
use opencourse_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response envelope for `GET /user`.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// GET /api/v1/user
///
/// Sanitized profile of the authenticated user: name, email, photo,
/// semester, and the onboarded flag. Never exposes internal columns.
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserEnvelope>> {
    let user = UserRepo::find_by_email(&state.pool, &auth.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}
