//! Actor lookup, search and mutation endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Deserialize;

use super::{AddedResponse, ApiResult, MessageResponse, RemovedResponse, parse_id};
use crate::AppState;
use crate::services::{ActorProfile, ActorSummary, CatalogError};

#[derive(Debug, Deserialize)]
pub struct CreateActorRequest {
    pub name: String,
}

/// Actor id as sent by the client; form-style clients send it as a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActorIdField {
    Number(i64),
    Text(String),
}

impl ActorIdField {
    fn resolve(&self) -> Result<i64, CatalogError> {
        match self {
            ActorIdField::Number(id) => Ok(*id),
            ActorIdField::Text(raw) => parse_id(raw, "ID do ator"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenameActorRequest {
    pub id: ActorIdField,
    pub name: String,
}

async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ActorProfile>> {
    let id = parse_id(&id, "ID do ator")?;
    let actor = state.catalog.get_actor(id).await?;
    Ok(Json(actor))
}

async fn search_actors(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> ApiResult<Json<Vec<ActorSummary>>> {
    let actors = state.catalog.search_actors(&term).await?;
    Ok(Json(actors))
}

async fn create_actor(
    State(state): State<AppState>,
    payload: Result<Json<CreateActorRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AddedResponse>)> {
    let Json(body) = payload?;
    let id = state.catalog.create_actor(&body.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            msg: "Ator adicionado com sucesso!".to_string(),
            id_added: id,
        }),
    ))
}

async fn rename_actor(
    State(state): State<AppState>,
    payload: Result<Json<RenameActorRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(body) = payload?;
    let id = body.id.resolve()?;
    state.catalog.rename_actor(id, &body.name).await?;
    Ok(Json(MessageResponse {
        msg: format!("ID {} alterado com sucesso!", id),
    }))
}

/// Remove an actor along with all of its participations
async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RemovedResponse>> {
    let id = parse_id(&id, "ID do ator")?;
    state.catalog.delete_actor(id).await?;
    Ok(Json(RemovedResponse {
        msg: "Ator removido com sucesso!".to_string(),
        id_removed: id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actor/{id}", get(get_actor))
        .route("/actors/search/{term}", get(search_actors))
        .route("/actors", post(create_actor).put(rename_actor))
        .route("/actors/{id}", delete(delete_actor))
}
