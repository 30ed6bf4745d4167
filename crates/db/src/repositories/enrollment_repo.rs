//! Repository for the `enrollments` table.

use sqlx::PgPool;

use crate::models::enrollment::{Enrollment, NewEnrollment};

const COLUMNS: &str = "id, email, course_id, total_hours, mode, category, \
                        enrolled_semester, enrolled_academic_year, created_at";

/// Enrollment writes and lookups.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Commit an enrollment batch atomically.
    ///
    /// Opens a single transaction, inserts one row per item in array
    /// order, flips the user's onboarded flag, then commits. Any failure
    /// rolls back the whole batch: other readers observe either all rows
    /// plus the flag flip, or nothing.
    ///
    /// Returns `RowNotFound` (and rolls back) if the user row is missing,
    /// so the flag flip can never be silently skipped.
    pub async fn enroll_all(
        pool: &PgPool,
        email: &str,
        items: &[NewEnrollment],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for item in items {
            sqlx::query(
                "INSERT INTO enrollments
                    (email, course_id, total_hours, mode, category,
                     enrolled_semester, enrolled_academic_year)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&item.email)
            .bind(&item.course_id)
            .bind(item.total_hours)
            .bind(&item.mode)
            .bind(&item.category)
            .bind(&item.enrolled_semester)
            .bind(&item.enrolled_academic_year)
            .execute(&mut *tx)
            .await?;
        }

        let updated =
            sqlx::query("UPDATE users SET onboarded = TRUE, updated_at = NOW() WHERE email = $1")
                .bind(email)
                .execute(&mut *tx)
                .await?;
        if updated.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        tx.commit().await?;

        tracing::info!(email, count = items.len(), "Enrollment batch committed");
        Ok(())
    }

    /// Course identifiers the user has already enrolled in, used to mark
    /// catalog rows non-selectable in the wizard.
    pub async fn course_ids_for_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT course_id FROM enrollments WHERE email = $1")
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// All enrollment rows for a user, oldest first.
    pub async fn list_for_email(pool: &PgPool, email: &str) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE email = $1 ORDER BY id");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }
}
