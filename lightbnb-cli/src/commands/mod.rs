//! Command implementations for lightbnb CLI

pub mod properties;
pub mod reservations;
pub mod user;

pub use properties::run_properties;
pub use reservations::run_reservations;
pub use user::run_user;

use std::path::Path;

use anyhow::{Context, Result};
use lightbnb_db::{create_pool, load_dotenv, Database, DbConfig};
use serde::Serialize;

/// Resolve connection settings and open a pool.
pub async fn connect(config_path: Option<&Path>) -> Result<Database> {
    load_dotenv();
    let config = match config_path {
        Some(path) => DbConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DbConfig::from_env().context("Invalid database settings in environment")?,
    };

    let pool = create_pool(&config)
        .await
        .context("Failed to connect to database")?;
    Ok(Database::new(pool))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}
