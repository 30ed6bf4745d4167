//! HTTP-level integration tests for the public course catalog endpoints.
//!
//! The catalog is pre-seeded by migrations, so these tests run against
//! realistic data.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/courses returns the seeded online catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_online_courses(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/courses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let courses = json.as_array().expect("body should be a bare array");
    assert_eq!(courses.len(), 8, "all seeded online courses are returned");

    let first = &courses[0];
    assert!(first["course_id"].as_str().is_some());
    assert!(first["course_name"].as_str().is_some());
    assert!(first["university"].as_str().is_some());
    assert!(first["hours"].as_i64().is_some());
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/courses/offline returns the seeded offline catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_offline_courses(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/courses/offline").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let courses = json.as_array().expect("body should be a bare array");
    assert_eq!(courses.len(), 7, "all seeded offline courses are returned");

    assert!(
        courses
            .iter()
            .all(|c| c["course_type"] == "OET" || c["course_type"] == "OEHM"),
        "every offline course carries a valid category"
    );
}

// ---------------------------------------------------------------------------
// Test: catalog reads require no authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_catalog_is_public(pool: PgPool) {
    let app = build_test_app(pool.clone());
    assert_eq!(
        get(app, "/api/v1/courses").await.status(),
        StatusCode::OK,
        "no Authorization header needed"
    );
}
