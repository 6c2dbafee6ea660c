//! Mapping of catalog errors onto HTTP responses

use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::error;

use crate::services::CatalogError;

const GENERIC_FAILURE: &str = "Algo deu errado.";

/// Error returned by every catalog handler
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CatalogError::validation(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        )))
    }
}

/// Single-field JSON object, e.g. `{"error_msg": "..."}`
fn message_body(key: &str, message: &str) -> Json<Value> {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::String(message.to_string()));
    Json(Value::Object(body))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            CatalogError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                message_body(kind.payload_key(), kind.message()),
            )
                .into_response(),
            CatalogError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, message_body("error_msg", &msg)).into_response()
            }
            CatalogError::Conflict(msg) => {
                (StatusCode::CONFLICT, message_body("error_msg", &msg)).into_response()
            }
            CatalogError::Integrity(detail) => {
                error!(detail = %detail, "Integrity violation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_body("error_msg", GENERIC_FAILURE),
                )
                    .into_response()
            }
            CatalogError::Store { action, source } => {
                error!(error = %source, ?action, "Store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_body("error_msg", action.public_message()),
                )
                    .into_response()
            }
        }
    }
}

/// Response for a handler that panicked; installed through `CatchPanicLayer`
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        message_body("error_msg", GENERIC_FAILURE),
    )
        .into_response()
}
