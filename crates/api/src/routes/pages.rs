//! Session-gated page routes, mounted at the root (not under `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/`.
///
/// ```text
/// GET /            -> redirect by session state
/// GET /onboarding  -> wizard page gate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::root))
        .route("/onboarding", get(pages::onboarding))
}
