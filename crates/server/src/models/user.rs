//! Directory user domain types.

use chrono::{DateTime, Utc};

use campus_core::{Email, UserId, UserRole};

/// A directory user (domain type).
///
/// Rows are created by the identity-sync collaborator when an external
/// identity first signs in; this service only reads them and mutates `role`.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal user ID.
    pub id: UserId,
    /// Stable identifier issued by the identity provider.
    pub auth_id: String,
    /// User's email address.
    pub email: Email,
    /// Role attribute; gates the admin-only operations.
    pub role: UserRole,
    /// When the directory row was created.
    pub created_at: DateTime<Utc>,
}

/// A resolved external identity.
///
/// Produced by the authenticated-only guard. Carries no role: plain
/// authenticated operations never consult the directory.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    /// Stable identifier issued by the identity provider.
    pub auth_id: String,
}
