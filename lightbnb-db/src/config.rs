//! Connection settings
//!
//! Settings come from one of three places:
//! - `DATABASE_URL`, which wins when set
//! - the libpq variables `PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`, `PGDATABASE`
//! - a TOML file with a `[database]` table
//!
//! Anything left unset falls back to the local development database
//! (`labber@localhost/lightbnb`).

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use tracing::{debug, info};

use crate::error::{DbError, Result};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "labber";
const DEFAULT_PASSWORD: &str = "labber";
const DEFAULT_DATABASE: &str = "lightbnb";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database connection settings
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Full connection string; overrides the individual fields when present
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    database: DbConfig,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.url = get("DATABASE_URL");
        if let Some(host) = get("PGHOST") {
            config.host = host;
        }
        if let Some(port) = get("PGPORT") {
            config.port = port
                .parse()
                .map_err(|_| DbError::config(format!("PGPORT must be a port number, got '{}'", port)))?;
        }
        if let Some(user) = get("PGUSER") {
            config.user = user;
        }
        if let Some(password) = get("PGPASSWORD") {
            config.password = password;
        }
        if let Some(database) = get("PGDATABASE") {
            config.database = database;
        }
        if let Some(max) = get("LIGHTBNB_MAX_CONNECTIONS") {
            config.max_connections = max.parse().map_err(|_| {
                DbError::config(format!(
                    "LIGHTBNB_MAX_CONNECTIONS must be a positive integer, got '{}'",
                    max
                ))
            })?;
        }

        Ok(config)
    }

    /// Parse settings from TOML text containing a `[database]` table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| DbError::config(format!("invalid config TOML: {}", e)))?;
        Ok(file.database)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DbError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded database config");
        Ok(config)
    }

    /// Build driver connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .map_err(|e| DbError::config(format!("invalid DATABASE_URL: {}", e)));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

/// Load environment variables from `.env` in the current directory.
///
/// Variables already present in the environment are not overwritten.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded configuration from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}
