//! Actor ↔ movie link endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};

use super::{AddedResponse, ApiResult, RemovedResponse, parse_id};
use crate::AppState;

async fn create_participation(
    State(state): State<AppState>,
    Path((actor_id, movie_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<AddedResponse>)> {
    let actor_id = parse_id(&actor_id, "ID do ator")?;
    let movie_id = parse_id(&movie_id, "ID do filme")?;
    let id = state.catalog.create_participation(actor_id, movie_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            msg: "Participação adicionada com sucesso!".to_string(),
            id_added: id,
        }),
    ))
}

async fn delete_participation(
    State(state): State<AppState>,
    Path((actor_id, movie_id)): Path<(String, String)>,
) -> ApiResult<Json<RemovedResponse>> {
    let actor_id = parse_id(&actor_id, "ID do ator")?;
    let movie_id = parse_id(&movie_id, "ID do filme")?;
    let id = state.catalog.delete_participation(actor_id, movie_id).await?;
    Ok(Json(RemovedResponse {
        msg: "Participação removida com sucesso!".to_string(),
        id_removed: id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/participations/{actor_id}/{movie_id}",
        post(create_participation).delete(delete_participation),
    )
}
