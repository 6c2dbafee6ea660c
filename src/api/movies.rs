//! Movie listing, lookup and search endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use super::{ApiResult, parse_id, parse_page};
use crate::AppState;
use crate::services::MovieDetails;

/// Movies on one page, best rated first
async fn list_movies(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> ApiResult<Json<Vec<MovieDetails>>> {
    let page = parse_page(&page)?;
    let movies = state.catalog.list_movies(page).await?;
    Ok(Json(movies))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MovieDetails>> {
    let id = parse_id(&id, "ID do filme")?;
    let movie = state.catalog.get_movie(id).await?;
    Ok(Json(movie))
}

/// Movies whose title contains the term, best rated first
async fn search_movies(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> ApiResult<Json<Vec<MovieDetails>>> {
    let movies = state.catalog.search_movies(&term).await?;
    Ok(Json(movies))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/{page}", get(list_movies))
        .route("/movie/{id}", get(get_movie))
        .route("/movies/search/{term}", get(search_movies))
}
