//! Course category domain type.

use campus_core::CategoryId;

/// A course category. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Category {
    /// Internal category ID.
    pub id: CategoryId,
    /// Unique display name.
    pub name: String,
    /// Symbolic icon name rendered by the UI (default "Layout").
    pub icon: String,
    /// Display color (default "#000000").
    pub color: String,
}
