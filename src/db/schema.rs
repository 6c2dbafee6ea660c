//! Schema bootstrap for the catalog tables
//!
//! Creates missing tables and indexes on startup. Existing tables are left
//! untouched: there is no column diffing and no migration history, so a
//! store seeded by another tool keeps whatever shape it already has.

use sqlx::SqlitePool;
use tracing::{debug, info};

/// Table name and its CREATE statement, in dependency order
const TABLES: &[(&str, &str)] = &[
    (
        "movies",
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            year INTEGER,
            runtime INTEGER,
            synopsis TEXT,
            poster TEXT,
            rating REAL,
            votes INTEGER,
            imdb_id TEXT
        )
        "#,
    ),
    (
        "actors",
        r#"
        CREATE TABLE IF NOT EXISTS actors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "genres",
        r#"
        CREATE TABLE IF NOT EXISTS genres (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "movie_genres",
        r#"
        CREATE TABLE IF NOT EXISTS movie_genres (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            movie_id INTEGER NOT NULL REFERENCES movies(id),
            genre_id INTEGER NOT NULL REFERENCES genres(id),
            UNIQUE (movie_id, genre_id)
        )
        "#,
    ),
    (
        "participations",
        r#"
        CREATE TABLE IF NOT EXISTS participations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            actor_id INTEGER NOT NULL REFERENCES actors(id),
            movie_id INTEGER NOT NULL REFERENCES movies(id),
            UNIQUE (actor_id, movie_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_movies_rating ON movies (rating DESC)",
    "CREATE INDEX IF NOT EXISTS idx_participations_movie ON participations (movie_id)",
    "CREATE INDEX IF NOT EXISTS idx_movie_genres_genre ON movie_genres (genre_id)",
];

/// Check if a table exists in the database
pub async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create any catalog table or index that is missing. Returns the names of
/// the tables that were created.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let mut created = Vec::new();

    for (table, ddl) in TABLES {
        if table_exists(pool, table).await? {
            debug!(table, "Table already present");
            continue;
        }
        sqlx::query(ddl).execute(pool).await?;
        info!(table, "Created table");
        created.push(table.to_string());
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(created)
}
