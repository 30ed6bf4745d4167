//! Handlers for the public course catalog reads.
//!
//! The catalog is small immutable reference data; each request re-reads the
//! database and returns the full unfiltered list in database order.

use axum::extract::State;
use axum::Json;
use opencourse_db::models::course::{OfflineCourse, OnlineCourse};
use opencourse_db::repositories::CourseRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/courses
///
/// Every online course as a bare JSON array.
pub async fn list_online(State(state): State<AppState>) -> AppResult<Json<Vec<OnlineCourse>>> {
    let courses = CourseRepo::list_online(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/offline
///
/// Every offline course as a bare JSON array.
pub async fn list_offline(State(state): State<AppState>) -> AppResult<Json<Vec<OfflineCourse>>> {
    let courses = CourseRepo::list_offline(&state.pool).await?;
    Ok(Json(courses))
}
