//! Authorization guard extractors.
//!
//! Two tiers, and the asymmetry is deliberate:
//!
//! - [`RequireAuth`] (authenticated-only): resolves the bearer token via the
//!   identity collaborator. The directory is NOT consulted and the role is
//!   NOT checked; some read endpoints are intentionally open to any
//!   authenticated caller.
//! - [`RequireAdmin`] (admin-only): resolves the identity, then looks up the
//!   internal user record and requires the ADMIN role. A resolved identity
//!   with no directory record is Forbidden, not Unauthorized.
//!
//! Extractors run before the handler body, so the authorize-then-mutate
//! ordering holds for every operation, under any request interleaving.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::{AuthIdentity, User};
use crate::state::AppState;

/// Extractor that requires a resolvable identity (any role).
///
/// # Example
///
/// ```rust,ignore
/// async fn list_users(
///     RequireAuth(identity): RequireAuth,
///     State(state): State<AppState>,
/// ) -> Result<Json<Vec<UserResponse>>, AppError> { ... }
/// ```
pub struct RequireAuth(pub AuthIdentity);

/// Extractor that requires a directory user with the ADMIN role.
pub struct RequireAdmin(pub User);

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Admin allow/deny core: a resolved identity must map to a directory user
/// holding the ADMIN role.
fn check_admin(user: Option<User>) -> Result<User, AppError> {
    let user = user.ok_or_else(|| {
        AppError::Forbidden("no directory record for this identity".to_owned())
    })?;
    if !user.role.is_admin() {
        return Err(AppError::Forbidden("admin role required".to_owned()));
    }
    Ok(user)
}

/// Resolve the request's bearer token to an external identity.
async fn resolve_identity(parts: &Parts, state: &AppState) -> Result<AuthIdentity, AppError> {
    let token = bearer_token(&parts.headers)
        .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_owned()))?;

    let auth_id = state
        .identity()
        .resolve(token)
        .await?
        .ok_or_else(|| AppError::Unauthorized("session token not recognized".to_owned()))?;

    Ok(AuthIdentity { auth_id })
}

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let identity = resolve_identity(parts, &state).await?;
        Ok(Self(identity))
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let identity = resolve_identity(parts, &state).await?;

        let user = UserRepository::new(state.pool())
            .find_by_auth_id(&identity.auth_id)
            .await
            .map_err(AppError::from)?;

        Ok(Self(check_admin(user)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
    use axum::response::IntoResponse;
    use campus_core::{Email, UserId, UserRole};
    use chrono::Utc;

    use super::*;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: UserId::new(1),
            auth_id: "ext_abc".to_owned(),
            email: Email::parse("someone@example.com").unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok_123"));
        assert_eq!(bearer_token(&headers), Some("tok_123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_check_admin_accepts_admin() {
        let user = check_admin(Some(user_with_role(UserRole::Admin))).unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_check_admin_rejects_regular_user() {
        let err = check_admin(Some(user_with_role(UserRole::User))).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_check_admin_rejects_unknown_identity() {
        // A resolved identity without a directory record is Forbidden, not
        // Unauthorized: the caller IS authenticated.
        let err = check_admin(None).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }
}
