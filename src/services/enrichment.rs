//! Attach related collections to base records.
//!
//! One pair of secondary queries per movie and one per actor; lists come
//! back from the store already sorted by name or title.

use serde::Serialize;

use crate::db::{ActorRecord, Database, MovieRecord};

/// A movie with its cast and genres
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: MovieRecord,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
}

/// An actor's name and filmography (single-actor lookup)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorProfile {
    pub name: String,
    pub movies: Vec<String>,
}

/// An actor search hit with filmography
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    pub id: i64,
    pub name: String,
    pub movies: Vec<String>,
}

/// Movies tagged with one genre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreMovies {
    pub genre: String,
    pub movies: Vec<String>,
}

pub async fn movie_details(db: &Database, movie: MovieRecord) -> Result<MovieDetails, sqlx::Error> {
    let actors = db.participations().actor_names_for_movie(movie.id).await?;
    let genres = db.genres().names_for_movie(movie.id).await?;
    Ok(MovieDetails { movie, actors, genres })
}

/// Enrich each movie in order; the first failure aborts the batch
pub async fn movie_details_list(
    db: &Database,
    movies: Vec<MovieRecord>,
) -> Result<Vec<MovieDetails>, sqlx::Error> {
    let mut details = Vec::with_capacity(movies.len());
    for movie in movies {
        details.push(movie_details(db, movie).await?);
    }
    Ok(details)
}

pub async fn filmography(db: &Database, actor_id: i64) -> Result<Vec<String>, sqlx::Error> {
    db.participations().movie_titles_for_actor(actor_id).await
}

pub async fn actor_profile(db: &Database, actor: ActorRecord) -> Result<ActorProfile, sqlx::Error> {
    let movies = filmography(db, actor.id).await?;
    Ok(ActorProfile { name: actor.name, movies })
}

pub async fn actor_summaries(
    db: &Database,
    actors: Vec<ActorRecord>,
) -> Result<Vec<ActorSummary>, sqlx::Error> {
    let mut summaries = Vec::with_capacity(actors.len());
    for actor in actors {
        let movies = filmography(db, actor.id).await?;
        summaries.push(ActorSummary { id: actor.id, name: actor.name, movies });
    }
    Ok(summaries)
}
