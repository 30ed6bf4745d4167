pub mod auth;
pub mod catalog;
pub mod health;
pub mod onboarding;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/callback                 identity-provider callback (public)
/// /auth/logout                   logout acknowledgement (public)
///
/// /user                          sanitized profile (auth)
///
/// /courses                       online catalog (public)
/// /courses/offline               offline catalog (public)
///
/// /onboarding/step               get / set wizard step (auth)
/// /onboarding/profile            save academic details (auth)
/// /onboarding/attendance         attendance gate (auth)
/// /onboarding/previously-taken   already-enrolled course ids (auth)
///
/// /enroll                        commit course selection (auth)
/// /enrollments                   committed rows (auth, onboarded)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Sign-in boundary (SSO callback, logout).
        .nest("/auth", auth::router())
        // Authenticated profile read.
        .route("/user", get(handlers::user::get_user))
        // Public catalog reads.
        .nest("/courses", catalog::router())
        // Wizard state and academic details.
        .nest("/onboarding", onboarding::router())
        // Enrollment commit and history.
        .route("/enroll", post(handlers::enroll::enroll))
        .route("/enrollments", get(handlers::enroll::list_enrollments))
}
