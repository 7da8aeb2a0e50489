//! Operator-side role management.

use secrecy::SecretString;
use thiserror::Error;

use campus_core::{UserId, UserRole};
use campus_server::db::{self, RepositoryError, UserRepository};

/// Errors from user commands.
#[derive(Debug, Error)]
pub enum UserCommandError {
    /// Neither `CAMPUS_DATABASE_URL` nor `DATABASE_URL` is set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The role string is outside {ADMIN, USER}.
    #[error("{0}")]
    InvalidRole(String),

    /// Connection failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Repository failure (unknown user, store error).
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Set a directory user's role.
///
/// # Errors
///
/// Returns [`UserCommandError`] if the role is invalid, the user does not
/// exist, or the database is unreachable.
pub async fn set_role(id: i32, role: &str) -> Result<(), UserCommandError> {
    dotenvy::dotenv().ok();

    // Same closed-set validation as the API's role mutation.
    let role: UserRole = role
        .parse()
        .map_err(|e: String| UserCommandError::InvalidRole(e))?;

    let database_url = std::env::var("CAMPUS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| UserCommandError::MissingEnvVar("CAMPUS_DATABASE_URL"))?;

    let pool = db::create_pool(&SecretString::from(database_url)).await?;

    let user = UserRepository::new(&pool)
        .update_role(UserId::new(id), role)
        .await?;

    tracing::info!(
        user = %user.id,
        email = %user.email,
        role = %user.role,
        "role updated"
    );
    Ok(())
}
