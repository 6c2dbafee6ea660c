//! Application configuration management

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind the HTTP listener on
    pub host: String,

    /// Server port
    pub port: u16,

    /// SQLite connection URL (`sqlite:` prefix, or `sqlite::memory:`)
    pub database_url: String,

    /// Upper bound on pooled connections
    pub database_max_connections: u32,

    /// How long a request waits for a pooled connection
    pub database_acquire_timeout: Duration,

    /// Movies per page on the paginated listing
    pub page_size: u32,

    /// Load the demo catalog into an empty store at startup
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite:catalog.db?mode=rwc".to_string(),
            database_max_connections: 10,
            database_acquire_timeout: Duration::from_secs(10),
            page_size: 10,
            seed_demo_data: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        // Prefer DATABASE_PATH (a bare file path), fall back to DATABASE_URL
        let database_url = match env::var("DATABASE_PATH") {
            Ok(path) => format!("sqlite:{}?mode=rwc", path),
            Err(_) => env::var("DATABASE_URL").unwrap_or(defaults.database_url),
        };

        let page_size: u32 = env::var("PAGE_SIZE")
            .unwrap_or_else(|_| defaults.page_size.to_string())
            .parse()
            .context("Invalid PAGE_SIZE")?;
        if page_size == 0 {
            bail!("PAGE_SIZE must be at least 1");
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .context("Invalid PORT")?,

            database_url,

            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| defaults.database_max_connections.to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,

            database_acquire_timeout: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .map(|v| v.parse::<u64>().context("Invalid DATABASE_ACQUIRE_TIMEOUT_SECS"))
                .transpose()?
                .map(Duration::from_secs)
                .unwrap_or(defaults.database_acquire_timeout),

            page_size,

            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Socket address string for the listener, e.g. `0.0.0.0:3000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
