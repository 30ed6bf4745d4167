//! Repository for the `attendance` table.

use sqlx::PgPool;

/// Read-only lookups against the attendance record set.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Whether an attendance record exists for the given email.
    /// Presence means the student's attendance is verified.
    pub async fn is_verified(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM attendance WHERE attendee_email = $1)",
        )
        .bind(email)
        .fetch_one(pool)
        .await
    }
}
