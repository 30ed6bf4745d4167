//! HTTP-level integration tests for the enrollment commit endpoint.
//!
//! Covers the whole gauntlet: authentication, batch shape validation in
//! array order, the selection rules, and the all-or-nothing transaction.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json, post_json_auth, seed_user};
use serde_json::{json, Value};
use sqlx::PgPool;

fn online(email: &str, course_id: &str, category: &str, hours: i64) -> Value {
    json!({
        "email": email,
        "course_id": course_id,
        "mode": "ONLINE",
        "type": category,
        "total_hours": hours,
        "enrolled_semester": "VI",
        "enrolled_academic_year": "2025-2026"
    })
}

fn offline(email: &str, course_id: &str, category: &str) -> Value {
    json!({
        "email": email,
        "course_id": course_id,
        "mode": "OFFLINE",
        "type": category,
        "enrolled_semester": "VI",
        "enrolled_academic_year": "2025-2026"
    })
}

async fn enrollment_count(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: enrollment requires authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_enroll_requires_auth(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/enroll",
        json!({ "courses": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: a missing or empty courses array is rejected wholesale
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_batch_rejected(pool: PgPool) {
    let email = "empty@college.edu";
    seed_user(&pool, email, Some("VI")).await;

    for body in [json!({}), json!({ "courses": [] })] {
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/v1/enroll", email, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid courses data");
    }
}

// ---------------------------------------------------------------------------
// Test: a bad item anywhere in the batch rejects the whole batch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bad_item_rejects_whole_batch(pool: PgPool) {
    let email = "shape@college.edu";
    seed_user(&pool, email, Some("VI")).await;

    let mut second = offline(email, "ILO6022", "OEHM");
    second["mode"] = Value::Null;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [online(email, "MOOC-101", "OET", 40), second] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Mode is missing");
    assert_eq!(
        enrollment_count(&pool, email).await,
        0,
        "a rejected batch writes nothing"
    );
}

// ---------------------------------------------------------------------------
// Test: enrollment is blocked until academic details exist
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_enroll_requires_academic_details(pool: PgPool) {
    let email = "nodetails@college.edu";
    seed_user(&pool, email, None).await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/enroll",
        email,
        json!({ "courses": [online(email, "MOOC-101", "OET", 40)] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Academic details must be submitted before enrolling"
    );
}

// ---------------------------------------------------------------------------
// Test: a valid mixed-mode batch commits and completes onboarding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_valid_batch_commits(pool: PgPool) {
    let email = "commit@college.edu";
    seed_user(&pool, email, Some("VI")).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [
            online(email, "MOOC-101", "OET", 40),
            offline(email, "ILO6022", "OEHM"),
        ] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Enrollment successful");

    assert_eq!(enrollment_count(&pool, email).await, 2);
    let onboarded: bool = sqlx::query_scalar("SELECT onboarded FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(onboarded, "a committed batch completes onboarding");
}

// ---------------------------------------------------------------------------
// Test: semester VII accepts a single OET course
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_terminal_semester_single_oet(pool: PgPool) {
    let email = "terminal@college.edu";
    seed_user(&pool, email, Some("VII")).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [offline(email, "ILO7017", "OET")] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(enrollment_count(&pool, email).await, 1);
}

// ---------------------------------------------------------------------------
// Test: selection rules reject undersized hours and duplicate ids
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_selection_rules_enforced(pool: PgPool) {
    let email = "rules@college.edu";
    seed_user(&pool, email, Some("VI")).await;

    // 29 summed online OET hours is below the floor.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [
            online(email, "MOOC-106", "OET", 29),
            offline(email, "ILO6022", "OEHM"),
        ] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("between 30 and 45"));

    // The same online course cannot satisfy both categories.
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [
            online(email, "MOOC-101", "OET", 40),
            online(email, "MOOC-101", "OEHM", 40),
        ] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("cannot be selected again"));

    assert_eq!(enrollment_count(&pool, email).await, 0);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/enrollments is gated on completed onboarding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_enrollments_list_gated_and_populated(pool: PgPool) {
    let email = "viewer@college.edu";
    seed_user(&pool, email, Some("VI")).await;

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/enrollments", email).await;
    assert_eq!(
        response.status(),
        StatusCode::FORBIDDEN,
        "not available before onboarding completes"
    );

    post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/enroll",
        email,
        json!({ "courses": [
            online(email, "MOOC-101", "OET", 40),
            offline(email, "ILO6022", "OEHM"),
        ] }),
    )
    .await;

    let response = get_auth(build_test_app(pool), "/api/v1/enrollments", email).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["course_id"], "MOOC-101");
    assert_eq!(rows[0]["type"], "OET", "category serializes as 'type'");
}
