//! Database connection and repositories

pub mod actors;
pub mod genres;
pub mod movies;
pub mod participations;
pub mod schema;
pub mod seed;

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::warn;

pub use actors::{ActorRecord, ActorRepository};
pub use genres::GenreRepository;
pub use movies::{MovieRecord, MovieRepository};
pub use participations::{
    CreateParticipationOutcome, DeleteParticipationOutcome, ParticipationRepository,
};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new connection pool.
    ///
    /// An in-memory database lives and dies with its connection, so `:memory:`
    /// URLs get exactly one connection that is never recycled.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);

        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(acquire_timeout)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .acquire_timeout(acquire_timeout)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    /// Connect, retrying every `retry_interval` for at most `attempts` tries
    pub async fn connect_with_retry(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
        retry_interval: Duration,
        attempts: u32,
    ) -> Result<Self> {
        let mut attempt = 1;
        loop {
            match Self::connect(url, max_connections, acquire_timeout).await {
                Ok(db) => return Ok(db),
                Err(e) if attempt < attempts => {
                    warn!(
                        error = %e,
                        attempt,
                        "Database connection failed, retrying in {}s",
                        retry_interval.as_secs()
                    );
                    attempt += 1;
                    tokio::time::sleep(retry_interval).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single-connection in-memory store with the schema applied
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:", 1, Duration::from_secs(5)).await?;
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create missing catalog tables
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.pool).await?;
        Ok(())
    }

    /// Get a movies repository
    pub fn movies(&self) -> MovieRepository {
        MovieRepository::new(self.pool.clone())
    }

    /// Get an actors repository
    pub fn actors(&self) -> ActorRepository {
        ActorRepository::new(self.pool.clone())
    }

    /// Get a genres repository
    pub fn genres(&self) -> GenreRepository {
        GenreRepository::new(self.pool.clone())
    }

    /// Get a participations repository
    pub fn participations(&self) -> ParticipationRepository {
        ParticipationRepository::new(self.pool.clone())
    }

    /// Check connectivity with a trivial round-trip
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

/// `LIKE` pattern matching `term` anywhere, with `\`, `%` and `_` escaped so
/// they match literally. Pair with `ESCAPE '\'` in the query.
///
/// SQLite's `LOWER` only folds ASCII letters, so callers lower both sides in
/// SQL rather than lowering the term here.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
