//! Integration tests for the enrollment commit transaction.
//!
//! Exercises the all-or-nothing contract: either every row of a batch is
//! persisted and the user's onboarded flag flips, or nothing changes.

use assert_matches::assert_matches;
use sqlx::PgPool;

use opencourse_db::models::enrollment::NewEnrollment;
use opencourse_db::models::user::UpsertUser;
use opencourse_db::repositories::{EnrollmentRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> UpsertUser {
    UpsertUser {
        email: email.to_string(),
        name: "Test Student".to_string(),
        profile_picture: None,
        attendance_verified: false,
    }
}

fn enrollment(email: &str, course_id: &str, mode: &str, category: &str) -> NewEnrollment {
    NewEnrollment {
        email: email.to_string(),
        course_id: course_id.to_string(),
        total_hours: if mode == "ONLINE" { Some(40) } else { None },
        mode: mode.to_string(),
        category: category.to_string(),
        enrolled_semester: "VI".to_string(),
        enrolled_academic_year: "2025-2026".to_string(),
    }
}

async fn enrollment_count(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn valid_batch_commits_all_rows_and_flips_onboarded(pool: PgPool) {
    let email = "atomic@college.edu";
    UserRepo::upsert_on_sign_in(&pool, &new_user(email))
        .await
        .expect("user upsert should succeed");

    let items = vec![
        enrollment(email, "MOOC-101", "ONLINE", "OET"),
        enrollment(email, "ILO6022", "OFFLINE", "OEHM"),
    ];
    EnrollmentRepo::enroll_all(&pool, email, &items)
        .await
        .expect("batch commit should succeed");

    assert_eq!(enrollment_count(&pool, email).await, 2);

    let user = UserRepo::find_by_email(&pool, email)
        .await
        .unwrap()
        .expect("user row must exist");
    assert!(user.onboarded, "onboarded must flip with the batch");

    // Rows were inserted in array order.
    let rows = EnrollmentRepo::list_for_email(&pool, email).await.unwrap();
    assert_eq!(rows[0].course_id, "MOOC-101");
    assert_eq!(rows[1].course_id, "ILO6022");
    assert_eq!(rows[0].total_hours, Some(40));
    assert_eq!(rows[1].total_hours, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_insert_rolls_back_entire_batch(pool: PgPool) {
    let email = "rollback@college.edu";
    UserRepo::upsert_on_sign_in(&pool, &new_user(email))
        .await
        .expect("user upsert should succeed");

    // Second item violates the mode CHECK constraint; the first insert
    // succeeded inside the transaction and must be rolled back.
    let mut bad = enrollment(email, "ILO6013", "OFFLINE", "OET");
    bad.mode = "HYBRID".to_string();
    let items = vec![enrollment(email, "MOOC-101", "ONLINE", "OET"), bad];

    let result = EnrollmentRepo::enroll_all(&pool, email, &items).await;
    assert!(result.is_err(), "constraint violation must fail the batch");

    assert_eq!(enrollment_count(&pool, email).await, 0);

    let user = UserRepo::find_by_email(&pool, email)
        .await
        .unwrap()
        .expect("user row must exist");
    assert!(!user.onboarded, "onboarded must be unchanged after rollback");
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_user_rolls_back_inserted_rows(pool: PgPool) {
    // No user row exists, so the flag update affects zero rows and the
    // whole batch must roll back even though the inserts succeeded.
    let email = "ghost@college.edu";
    let items = vec![enrollment(email, "MOOC-101", "ONLINE", "OET")];

    let result = EnrollmentRepo::enroll_all(&pool, email, &items).await;
    assert_matches!(result, Err(sqlx::Error::RowNotFound));

    assert_eq!(enrollment_count(&pool, email).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn course_ids_reflect_committed_rows(pool: PgPool) {
    let email = "history@college.edu";
    UserRepo::upsert_on_sign_in(&pool, &new_user(email))
        .await
        .unwrap();

    let none = EnrollmentRepo::course_ids_for_email(&pool, email)
        .await
        .unwrap();
    assert!(none.is_empty());

    let items = vec![
        enrollment(email, "MOOC-101", "ONLINE", "OET"),
        enrollment(email, "ILO6022", "OFFLINE", "OEHM"),
    ];
    EnrollmentRepo::enroll_all(&pool, email, &items).await.unwrap();

    let ids = EnrollmentRepo::course_ids_for_email(&pool, email)
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"MOOC-101".to_string()));
    assert!(ids.contains(&"ILO6022".to_string()));
}
