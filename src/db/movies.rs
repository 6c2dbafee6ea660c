//! Movie database repository

use serde::Serialize;
use sqlx::SqlitePool;

/// Movie record from database
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i32>,
    pub synopsis: Option<String>,
    pub poster: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub imdb_id: Option<String>,
}

pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// One page of movies, best rated first. `page` is 1-indexed; anything
    /// below 1 is treated as the first page.
    pub async fn list_page(&self, page: i64, page_size: u32) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let page_size = i64::from(page_size);
        let offset = (page.max(1) - 1).saturating_mul(page_size);

        sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, year, runtime, synopsis, poster, rating, votes, imdb_id
            FROM movies
            ORDER BY rating DESC, id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    /// Get a movie by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<MovieRecord>, sqlx::Error> {
        sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, year, runtime, synopsis, poster, rating, votes, imdb_id
            FROM movies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Search movies by title substring (case-insensitive), best rated first
    pub async fn search_by_title(&self, term: &str) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let search_pattern = super::contains_pattern(term);
        sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, year, runtime, synopsis, poster, rating, votes, imdb_id
            FROM movies
            WHERE LOWER(title) LIKE LOWER(?) ESCAPE '\'
            ORDER BY rating DESC, id
            "#,
        )
        .bind(&search_pattern)
        .fetch_all(&self.pool)
        .await
    }

    /// Titles of every movie tagged with the genre named exactly `genre`
    pub async fn titles_by_genre(&self, genre: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT movies.title FROM movies
            INNER JOIN movie_genres ON movies.id = movie_genres.movie_id
            INNER JOIN genres ON movie_genres.genre_id = genres.id
            WHERE genres.name = ?
            ORDER BY movies.title ASC
            "#,
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await
    }

    /// Get movie count
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
    }
}
