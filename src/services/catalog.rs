//! Catalog operations: not-found, validation and conflict policy on top of
//! the repositories and the enrichment layer.

use tracing::{debug, error, info};

use crate::db::{CreateParticipationOutcome, Database, DeleteParticipationOutcome};
use crate::services::enrichment::{
    self, ActorProfile, ActorSummary, GenreMovies, MovieDetails,
};
use crate::services::error::{CatalogError, CatalogResult, NotFound, StoreAction};

#[derive(Clone)]
pub struct CatalogService {
    db: Database,
    page_size: u32,
}

impl CatalogService {
    pub fn new(db: Database, page_size: u32) -> Self {
        Self {
            db,
            page_size: page_size.max(1),
        }
    }

    /// One page of movies by rating, with cast and genres
    pub async fn list_movies(&self, page: i64) -> CatalogResult<Vec<MovieDetails>> {
        let page = page.max(1);
        let movies = self
            .db
            .movies()
            .list_page(page, self.page_size)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?;

        if movies.is_empty() {
            debug!(page, "Requested page is past the end of the catalog");
            return Err(CatalogError::NotFound(NotFound::Page));
        }

        enrichment::movie_details_list(&self.db, movies)
            .await
            .map_err(CatalogError::store(StoreAction::Read))
    }

    pub async fn get_movie(&self, id: i64) -> CatalogResult<MovieDetails> {
        let movie = self
            .db
            .movies()
            .get_by_id(id)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?
            .ok_or(CatalogError::NotFound(NotFound::Movie))?;

        enrichment::movie_details(&self.db, movie)
            .await
            .map_err(CatalogError::store(StoreAction::Read))
    }

    /// Title substring search; an empty term matches every movie
    pub async fn search_movies(&self, term: &str) -> CatalogResult<Vec<MovieDetails>> {
        let movies = self
            .db
            .movies()
            .search_by_title(term)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?;

        if movies.is_empty() {
            return Err(CatalogError::NotFound(NotFound::SearchResults));
        }

        enrichment::movie_details_list(&self.db, movies)
            .await
            .map_err(CatalogError::store(StoreAction::Read))
    }

    pub async fn movies_by_genre(&self, genre: &str) -> CatalogResult<GenreMovies> {
        let movies = self
            .db
            .movies()
            .titles_by_genre(genre)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?;

        if movies.is_empty() {
            return Err(CatalogError::NotFound(NotFound::Genre));
        }

        Ok(GenreMovies {
            genre: genre.to_string(),
            movies,
        })
    }

    pub async fn get_actor(&self, id: i64) -> CatalogResult<ActorProfile> {
        let actor = self
            .db
            .actors()
            .get_by_id(id)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?
            .ok_or(CatalogError::NotFound(NotFound::Actor))?;

        enrichment::actor_profile(&self.db, actor)
            .await
            .map_err(CatalogError::store(StoreAction::Read))
    }

    pub async fn search_actors(&self, term: &str) -> CatalogResult<Vec<ActorSummary>> {
        let actors = self
            .db
            .actors()
            .search_by_name(term)
            .await
            .map_err(CatalogError::store(StoreAction::Read))?;

        if actors.is_empty() {
            return Err(CatalogError::NotFound(NotFound::ActorSearch));
        }

        enrichment::actor_summaries(&self.db, actors)
            .await
            .map_err(CatalogError::store(StoreAction::Read))
    }

    /// Add an actor, returning its new id
    pub async fn create_actor(&self, name: &str) -> CatalogResult<i64> {
        let name = validate_name(name)?;
        let id = self
            .db
            .actors()
            .create(name)
            .await
            .map_err(CatalogError::store(StoreAction::CreateActor))?;

        info!(actor_id = id, actor_name = name, "Actor created");
        Ok(id)
    }

    pub async fn rename_actor(&self, id: i64, name: &str) -> CatalogResult<()> {
        let name = validate_name(name)?;
        let renamed = self
            .db
            .actors()
            .rename(id, name)
            .await
            .map_err(CatalogError::store(StoreAction::RenameActor))?;

        if !renamed {
            return Err(CatalogError::NotFound(NotFound::ActorToRename));
        }

        info!(actor_id = id, actor_name = name, "Actor renamed");
        Ok(())
    }

    /// Remove an actor and every participation it holds
    pub async fn delete_actor(&self, id: i64) -> CatalogResult<()> {
        let removed_links = self
            .db
            .actors()
            .delete(id)
            .await
            .map_err(CatalogError::store(StoreAction::DeleteActor))?
            .ok_or(CatalogError::NotFound(NotFound::ActorToRemove))?;

        info!(actor_id = id, removed_links, "Actor removed");
        Ok(())
    }

    /// Link an actor to a movie, returning the new participation id
    pub async fn create_participation(&self, actor_id: i64, movie_id: i64) -> CatalogResult<i64> {
        let outcome = self
            .db
            .participations()
            .create(actor_id, movie_id)
            .await
            .map_err(CatalogError::store(StoreAction::CreateParticipation))?;

        match outcome {
            CreateParticipationOutcome::Created(id) => {
                info!(participation_id = id, actor_id, movie_id, "Participation created");
                Ok(id)
            }
            CreateParticipationOutcome::ActorMissing => {
                Err(CatalogError::NotFound(NotFound::ParticipationActor))
            }
            CreateParticipationOutcome::MovieMissing => {
                Err(CatalogError::NotFound(NotFound::ParticipationMovie))
            }
            CreateParticipationOutcome::AlreadyLinked(id) => Err(CatalogError::Conflict(format!(
                "Ator {} já está vinculado ao filme {} (participação {}).",
                actor_id, movie_id, id
            ))),
        }
    }

    /// Unlink an actor from a movie, returning the removed participation id
    pub async fn delete_participation(&self, actor_id: i64, movie_id: i64) -> CatalogResult<i64> {
        let outcome = self
            .db
            .participations()
            .delete(actor_id, movie_id)
            .await
            .map_err(CatalogError::store(StoreAction::DeleteParticipation))?;

        match outcome {
            DeleteParticipationOutcome::Removed(id) => {
                info!(participation_id = id, actor_id, movie_id, "Participation removed");
                Ok(id)
            }
            DeleteParticipationOutcome::NotLinked => {
                Err(CatalogError::NotFound(NotFound::Participation))
            }
            DeleteParticipationOutcome::Vanished(id) => {
                error!(
                    participation_id = id,
                    actor_id, movie_id, "Participation found but delete affected no rows"
                );
                Err(CatalogError::Integrity(format!(
                    "participation {} vanished during delete",
                    id
                )))
            }
        }
    }
}

/// Trimmed, non-empty actor name
fn validate_name(name: &str) -> CatalogResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::validation("O nome do ator não pode ser vazio."));
    }
    Ok(name)
}
