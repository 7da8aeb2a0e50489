//! Course repository (read path only).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use campus_core::{CategoryId, CourseId};

use super::RepositoryError;
use crate::models::Course;

/// Internal row type for `PostgreSQL` course queries.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i32,
    owner_auth_id: String,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    price: Option<Decimal>,
    is_published: bool,
    category_id: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id: CourseId::new(row.id),
            owner_auth_id: row.owner_auth_id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            price: row.price,
            is_published: row.is_published,
            category_id: row.category_id.map(CategoryId::new),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for course database operations.
pub struct CourseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepository<'a> {
    /// Create a new course repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single course's full editable representation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, owner_auth_id, title, description, image_url, price, \
                    is_published, category_id, created_at, updated_at \
             FROM courses WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Count all courses.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
