//! Participation (actor ↔ movie link) repository
//!
//! Also owns the two join queries used to build cast lists and
//! filmographies, since both walk the participations table.

use sqlx::SqlitePool;

/// Participation record from database
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ParticipationRecord {
    pub id: i64,
    pub actor_id: i64,
    pub movie_id: i64,
}

/// What happened when linking an actor to a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateParticipationOutcome {
    Created(i64),
    ActorMissing,
    MovieMissing,
    AlreadyLinked(i64),
}

/// What happened when unlinking an actor from a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteParticipationOutcome {
    Removed(i64),
    NotLinked,
    /// The link was found but the delete touched no row
    Vanished(i64),
}

pub struct ParticipationRepository {
    pool: SqlitePool,
}

impl ParticipationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Link an actor to a movie. Both ends must exist and the pair must not
    /// already be linked; the checks and the insert share one transaction.
    pub async fn create(
        &self,
        actor_id: i64,
        movie_id: i64,
    ) -> Result<CreateParticipationOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let actor: Option<i64> = sqlx::query_scalar("SELECT id FROM actors WHERE id = ?")
            .bind(actor_id)
            .fetch_optional(&mut *tx)
            .await?;
        if actor.is_none() {
            return Ok(CreateParticipationOutcome::ActorMissing);
        }

        let movie: Option<i64> = sqlx::query_scalar("SELECT id FROM movies WHERE id = ?")
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;
        if movie.is_none() {
            return Ok(CreateParticipationOutcome::MovieMissing);
        }

        let existing: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM participations WHERE actor_id = ? AND movie_id = ?",
        )
        .bind(actor_id)
        .bind(movie_id)
        .fetch_optional(&mut *tx)
        .await?;
        if let Some(id) = existing {
            return Ok(CreateParticipationOutcome::AlreadyLinked(id));
        }

        let result = sqlx::query("INSERT INTO participations (actor_id, movie_id) VALUES (?, ?)")
            .bind(actor_id)
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(CreateParticipationOutcome::Created(result.last_insert_rowid()))
    }

    /// Remove the link between an actor and a movie: look the row up by the
    /// pair, then delete it by its own id, inside one transaction.
    pub async fn delete(
        &self,
        actor_id: i64,
        movie_id: i64,
    ) -> Result<DeleteParticipationOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let link: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM participations WHERE actor_id = ? AND movie_id = ?",
        )
        .bind(actor_id)
        .bind(movie_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(link_id) = link else {
            return Ok(DeleteParticipationOutcome::NotLinked);
        };

        let result = sqlx::query("DELETE FROM participations WHERE id = ?")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(DeleteParticipationOutcome::Vanished(link_id));
        }

        tx.commit().await?;
        Ok(DeleteParticipationOutcome::Removed(link_id))
    }

    /// Names of the actors in a movie, alphabetical
    pub async fn actor_names_for_movie(&self, movie_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT actors.name FROM actors
            INNER JOIN participations ON actors.id = participations.actor_id
            WHERE participations.movie_id = ?
            ORDER BY actors.name ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Titles of the movies an actor appears in, alphabetical
    pub async fn movie_titles_for_actor(&self, actor_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT movies.title FROM movies
            INNER JOIN participations ON movies.id = participations.movie_id
            WHERE participations.actor_id = ?
            ORDER BY movies.title ASC
            "#,
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await
    }
}

// Lookups used by tests to inspect link state directly
#[cfg(test)]
impl ParticipationRepository {
    /// Find the link between an actor and a movie
    pub async fn find(
        &self,
        actor_id: i64,
        movie_id: i64,
    ) -> Result<Option<ParticipationRecord>, sqlx::Error> {
        sqlx::query_as::<_, ParticipationRecord>(
            "SELECT id, actor_id, movie_id FROM participations WHERE actor_id = ? AND movie_id = ?",
        )
        .bind(actor_id)
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_for_actor(&self, actor_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM participations WHERE actor_id = ?")
            .bind(actor_id)
            .fetch_one(&self.pool)
            .await
    }
}
