//! Route definitions for the `/courses` catalog resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET /         -> online course list
/// GET /offline  -> offline course list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_online))
        .route("/offline", get(catalog::list_offline))
}
