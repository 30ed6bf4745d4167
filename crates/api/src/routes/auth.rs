//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /callback  -> identity-provider callback
/// GET  /logout    -> logout acknowledgement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/callback", post(auth::callback))
        .route("/logout", get(auth::logout))
}
