//! Directory user handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campus_core::{UserId, UserRole};

use crate::{
    db::UserRepository,
    error::AppError,
    middleware::auth::{RequireAdmin, RequireAuth},
    models::User,
    state::AppState,
};

/// Cap on the admin shortlist shown on the dashboard.
const ADMIN_LIST_LIMIT: i64 = 5;

/// Full user representation returned to the admin UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub auth_id: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            auth_id: user.auth_id,
            email: user.email.into_inner(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Restricted-field listing entry.
#[derive(Debug, Serialize)]
pub struct DirectoryEntry {
    pub id: UserId,
    pub email: String,
}

/// Request body for the role mutation.
///
/// The role arrives as a string and is validated against the closed set
/// before any store access.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// List all users, newest first (authenticated-only).
///
/// # Errors
///
/// Returns 401 without a resolvable identity, 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn list_users(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// List users with only `{id, email}` exposed (authenticated-only).
///
/// # Errors
///
/// Returns 401 without a resolvable identity, 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn directory(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<DirectoryEntry>>, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    let entries = users
        .into_iter()
        .map(|u| DirectoryEntry {
            id: u.id,
            email: u.email.into_inner(),
        })
        .collect();
    Ok(Json(entries))
}

/// List up to 5 most recently created ADMIN users (authenticated-only).
///
/// # Errors
///
/// Returns 401 without a resolvable identity, 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn list_admins(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let admins = UserRepository::new(state.pool())
        .list_admins(ADMIN_LIST_LIMIT)
        .await?;
    Ok(Json(admins.into_iter().map(Into::into).collect()))
}

/// Update a user's role (admin-only).
///
/// The guard resolves and checks the caller's role before this body runs;
/// the target row is never touched on a guard failure.
///
/// # Errors
///
/// Returns 401/403 on guard failure, 400 for a role outside {ADMIN, USER},
/// 404 for an unknown target, 500 on store failure.
#[tracing::instrument(skip_all, fields(target = %id))]
pub async fn update_role(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let role: UserRole = body
        .role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid role: {}", body.role)))?;

    let user = UserRepository::new(state.pool())
        .update_role(UserId::new(id), role)
        .await?;

    Ok(Json(user.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use campus_core::Email;

    #[test]
    fn test_user_response_serializes_camel_case() {
        let user = User {
            id: UserId::new(3),
            auth_id: "ext_3".to_owned(),
            email: Email::parse("a@b.c").unwrap(),
            role: UserRole::Admin,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["authId"], "ext_3");
        assert_eq!(value["email"], "a@b.c");
        assert_eq!(value["role"], "ADMIN");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_admin_list_limit_is_five() {
        assert_eq!(ADMIN_LIST_LIMIT, 5);
    }
}
