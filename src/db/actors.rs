//! Actor database repository

use serde::Serialize;
use sqlx::SqlitePool;

/// Actor record from database
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ActorRecord {
    pub id: i64,
    pub name: String,
}

pub struct ActorRepository {
    pool: SqlitePool,
}

impl ActorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an actor by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ActorRecord>, sqlx::Error> {
        sqlx::query_as::<_, ActorRecord>("SELECT id, name FROM actors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Search actors by name substring (case-insensitive), alphabetical
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<ActorRecord>, sqlx::Error> {
        let search_pattern = super::contains_pattern(term);
        sqlx::query_as::<_, ActorRecord>(
            r#"
            SELECT id, name FROM actors
            WHERE LOWER(name) LIKE LOWER(?) ESCAPE '\'
            ORDER BY name ASC, id
            "#,
        )
        .bind(&search_pattern)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert an actor, returning the generated id
    pub async fn create(&self, name: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO actors (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Rename an actor. Returns false when no row has that id.
    pub async fn rename(&self, id: i64, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE actors SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an actor together with all of its participations.
    ///
    /// Participations go first so no row is ever left pointing at a missing
    /// actor. Returns the number of participations removed, or `None` if the
    /// actor does not exist, in which case nothing is changed.
    pub async fn delete(&self, id: i64) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let links = sqlx::query("DELETE FROM participations WHERE actor_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let actor = sqlx::query("DELETE FROM actors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if actor.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(links.rows_affected()))
    }
}
