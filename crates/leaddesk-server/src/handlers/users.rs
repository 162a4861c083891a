//! User handlers

use super::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leaddesk_types::{NewUser, UpdateUser, User};
use serde_json::Value;
use tracing::info;

const ENTITY: &str = "User";

pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.storage.get_all_users().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .storage
        .get_user(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new_user): ValidJson<NewUser>,
) -> (StatusCode, Json<User>) {
    let user = state.storage.create_user(new_user).await;
    info!("Created user {} ({})", user.username, user.id);
    (StatusCode::CREATED, Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    state
        .storage
        .update_user(&id, update)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.storage.delete_user(&id).await {
        return Err(ApiError::not_found(ENTITY));
    }
    info!("Deleted user {}", id);
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

/// Body: `{"permissions": ["blogs", ...]}`
pub async fn update_permissions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let permissions = body
        .get("permissions")
        .and_then(Value::as_array)
        .ok_or(ApiError::BadRequest("Permissions must be an array"))?
        .iter()
        .map(|p| p.as_str().map(str::to_string))
        .collect::<Option<Vec<String>>>()
        .ok_or(ApiError::BadRequest("Permissions must be an array of strings"))?;

    state
        .storage
        .update_user_permissions(&id, permissions)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

/// Body: `{"isActive": true|false}`
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let is_active = body
        .get("isActive")
        .and_then(Value::as_bool)
        .ok_or(ApiError::BadRequest("isActive must be a boolean"))?;

    state
        .storage
        .update_user_status(&id, is_active)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}
