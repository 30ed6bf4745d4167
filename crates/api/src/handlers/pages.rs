//! Session-gated page routes.
//!
//! These routes decide where the browser lands: signed-out visitors go to
//! the sign-in page, signed-in users without a completed onboarding go to
//! the wizard, everyone else goes to the catalog. Only authentication
//! failures redirect; a datastore fault is surfaced as a service error so
//! it is never mistaken for an expired session.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;
use opencourse_db::models::user::User;
use opencourse_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppResult;
use crate::state::AppState;

/// Sign-in page for visitors without a valid session.
const SIGN_IN_PAGE: &str = "/login.html";

/// Wizard page for signed-in users who have not finished onboarding.
const ONBOARDING_PAGE: &str = "/onboarding.html";

/// Catalog landing page for fully onboarded users.
const CATALOG_PAGE: &str = "/index.html";

/// GET /
///
/// Route the visitor by session state: sign-in, wizard, or catalog.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Redirect> {
    let Some(user) = session_user(&state, &headers).await? else {
        return Ok(Redirect::to(SIGN_IN_PAGE));
    };
    if !user.onboarded {
        return Ok(Redirect::to(ONBOARDING_PAGE));
    }
    Ok(Redirect::to(CATALOG_PAGE))
}

/// GET /onboarding
///
/// The wizard page requires a session; an already-onboarded user is sent
/// back to the catalog instead of re-entering the wizard.
pub async fn onboarding(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Redirect> {
    let Some(user) = session_user(&state, &headers).await? else {
        return Ok(Redirect::to(SIGN_IN_PAGE));
    };
    if user.onboarded {
        return Ok(Redirect::to(CATALOG_PAGE));
    }
    Ok(Redirect::to(ONBOARDING_PAGE))
}

/// Resolve the session to its user row, or `None` when the request has no
/// valid session. Database errors propagate; they are not a sign-out.
async fn session_user(state: &AppState, headers: &HeaderMap) -> AppResult<Option<User>> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Ok(None);
    };
    let Ok(claims) = validate_token(token, &state.config.jwt) else {
        return Ok(None);
    };

    let user = UserRepo::find_by_email(&state.pool, &claims.sub).await?;
    Ok(user)
}
