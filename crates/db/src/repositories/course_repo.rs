//! Repository for the course catalog tables.

use sqlx::PgPool;

use crate::models::course::{OfflineCourse, OnlineCourse};

const ONLINE_COLUMNS: &str =
    "course_id, course_name, university, domain, difficulty_level, language, hours";

const OFFLINE_COLUMNS: &str =
    "course_code, course_name, faculty_name, faculty_email, semester, course_type";

/// Read-only catalog queries. Each call re-reads the database; the
/// catalog is small reference data and is never cached.
pub struct CourseRepo;

impl CourseRepo {
    /// Full list of online courses in database order.
    pub async fn list_online(pool: &PgPool) -> Result<Vec<OnlineCourse>, sqlx::Error> {
        let query = format!("SELECT {ONLINE_COLUMNS} FROM courses_online");
        sqlx::query_as::<_, OnlineCourse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Full list of offline courses in database order.
    pub async fn list_offline(pool: &PgPool) -> Result<Vec<OfflineCourse>, sqlx::Error> {
        let query = format!("SELECT {OFFLINE_COLUMNS} FROM courses_offline");
        sqlx::query_as::<_, OfflineCourse>(&query)
            .fetch_all(pool)
            .await
    }
}
