//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{AcademicDetails, UpsertUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, profile_picture, roll_number, branch, semester, \
                        academic_year, onboarding_step, onboarded, attendance_verified, \
                        created_at, updated_at";

/// Provides profile and onboarding-state operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Upsert a profile on sign-in: insert a new row, or refresh the
    /// name, photo, and attendance verification on email conflict.
    /// Returns the resulting full profile.
    pub async fn upsert_on_sign_in(pool: &PgPool, input: &UpsertUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, profile_picture, attendance_verified)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                profile_picture = EXCLUDED.profile_picture,
                attendance_verified = EXCLUDED.attendance_verified,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.profile_picture)
            .bind(input.attendance_verified)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (the identity key).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Current onboarding step for a user, or `None` when no row exists.
    /// Callers default a missing value to step 1.
    pub async fn onboarding_step(pool: &PgPool, email: &str) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT onboarding_step FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Persist a wizard step for a user. Returns `false` if no row exists.
    pub async fn set_onboarding_step(
        pool: &PgPool,
        email: &str,
        step: i32,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET onboarding_step = $2, updated_at = NOW() WHERE email = $1")
                .bind(email)
                .bind(step)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist the validated academic details and advance the wizard to
    /// step 2. Returns `None` if no row with the given email exists.
    pub async fn update_academic_details(
        pool: &PgPool,
        email: &str,
        details: &AcademicDetails,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                roll_number = $2,
                branch = $3,
                semester = $4,
                academic_year = $5,
                onboarding_step = 2,
                updated_at = NOW()
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&details.roll_number)
            .bind(&details.branch)
            .bind(&details.semester)
            .bind(&details.academic_year)
            .fetch_optional(pool)
            .await
    }
}
