//! Database connection pool management
//!
//! Uses sqlx PgPool. The pool is created once by the caller and handed to
//! [`crate::Database`]; nothing here keeps a global handle.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DbConfig;
use crate::error::Result;

/// Create a PostgreSQL connection pool from settings.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// let db = Database::new(pool);
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    let options = config.connect_options()?;
    info!(
        host = %options.get_host(),
        database = ?options.get_database(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}
