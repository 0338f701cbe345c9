//! Embedded schema migrations for the `members` and `presence` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use teamchat_core::error::{AppError, ErrorKind};

/// Migrations compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date. Safe to call on every start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(known = MIGRATOR.iter().count(), "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!("Schema up to date");
    Ok(())
}
