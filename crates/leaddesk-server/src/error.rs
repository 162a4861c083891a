//! HTTP error responses

use crate::services::auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing record; `entity` is the capitalized noun, e.g. "Blog".
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Payload failed to parse or validate; `entity` is lowercase, e.g. "blog".
    #[error("Invalid {entity} data")]
    InvalidData {
        entity: &'static str,
        errors: Vec<String>,
    },

    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        ApiError::NotFound { entity }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::InvalidData { errors, .. } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message, "errors": errors })),
            )
                .into_response(),
            ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Auth(_) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": message })),
            )
                .into_response(),
        }
    }
}
