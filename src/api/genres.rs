//! Genre lookup endpoint

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use super::ApiResult;
use crate::AppState;
use crate::services::GenreMovies;

/// Titles of every movie in a genre, matched by exact name
async fn movies_by_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<GenreMovies>> {
    let genre = state.catalog.movies_by_genre(&name).await?;
    Ok(Json(genre))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/genres/{name}", get(movies_by_genre))
}
