//! Database migration command.
//!
//! Migrations are embedded from `crates/server/migrations/` at compile time
//! and applied against `CAMPUS_DATABASE_URL` (or `DATABASE_URL`).

use secrecy::SecretString;
use thiserror::Error;

use campus_server::db;

/// Errors from the migrate command.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Neither `CAMPUS_DATABASE_URL` nor `DATABASE_URL` is set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Connection failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Migration failure.
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns [`MigrationError`] if the database URL is missing or a migration
/// fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CAMPUS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("CAMPUS_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&SecretString::from(database_url)).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
