//! REST route definitions
//!
//! Path parameters arrive as raw strings and are parsed here so a malformed
//! id or page number is reported as a 400 before any query runs.

pub mod actors;
pub mod error;
pub mod genres;
pub mod health;
pub mod movies;
pub mod participations;

use axum::Router;
use serde::Serialize;

use crate::AppState;
use crate::services::CatalogError;

pub use error::{ApiError, ApiResult};

/// `{msg, id_added}`
#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub msg: String,
    pub id_added: i64,
}

/// `{msg, id_removed}`
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub msg: String,
    pub id_removed: i64,
}

/// `{msg}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Parse a numeric identifier from a path segment or body field
pub fn parse_id(raw: &str, what: &str) -> Result<i64, CatalogError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::validation(format!("{} inválido: '{}'", what, raw)))
}

/// Parse a 1-indexed page number. Values below 1 are accepted here and
/// clamped to the first page by the catalog.
pub fn parse_page(raw: &str) -> Result<i64, CatalogError> {
    parse_id(raw, "Número de página")
}

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(genres::router())
        .merge(actors::router())
        .merge(participations::router())
}
