//! Course domain type (read path only).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use campus_core::{CategoryId, CourseId};

/// The full editable representation of a course, as consumed by the
/// authoring UI. Course writes are out of scope for this service.
#[derive(Debug, Clone)]
pub struct Course {
    /// Internal course ID.
    pub id: CourseId,
    /// Identity-provider ID of the course owner.
    pub owner_auth_id: String,
    /// Course title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Optional cover image URL.
    pub image_url: Option<String>,
    /// Optional price; `None` while the course is still being drafted.
    pub price: Option<Decimal>,
    /// Whether the course is visible to learners.
    pub is_published: bool,
    /// Optional category reference.
    pub category_id: Option<CategoryId>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}
