//! Route definitions for the `/onboarding` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`. All require authentication.
///
/// ```text
/// GET  /step              -> persisted wizard step (defaults to 1)
/// POST /step              -> persist a one-step transition
/// POST /profile           -> save academic details, advance to step 2
/// GET  /attendance        -> attendance verification gate
/// GET  /previously-taken  -> already-enrolled course ids
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/step",
            get(onboarding::get_step).post(onboarding::set_step),
        )
        .route("/profile", post(onboarding::update_profile))
        .route("/attendance", get(onboarding::get_attendance))
        .route("/previously-taken", get(onboarding::previously_taken))
}
