//! Genre database repository (read-only)

use sqlx::SqlitePool;

pub struct GenreRepository {
    pool: SqlitePool,
}

impl GenreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Genre names attached to a movie, alphabetical
    pub async fn names_for_movie(&self, movie_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT genres.name FROM genres
            INNER JOIN movie_genres ON genres.id = movie_genres.genre_id
            WHERE movie_genres.movie_id = ?
            ORDER BY genres.name ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
    }
}
