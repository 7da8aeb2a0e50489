//! Enrollment repository.
//!
//! Enrollments are owned by the learner-facing application; this service
//! only counts them for the statistics view.

use sqlx::PgPool;

use super::RepositoryError;

/// Repository for enrollment database operations.
pub struct EnrollmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EnrollmentRepository<'a> {
    /// Create a new enrollment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all enrollments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
