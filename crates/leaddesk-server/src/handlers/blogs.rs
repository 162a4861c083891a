//! Blog handlers

use super::{MessageResponse, SearchParams};
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use leaddesk_types::{Blog, NewBlog, UpdateBlog};

const ENTITY: &str = "Blog";

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Blog>> {
    let blogs = match params.query() {
        Some(query) => state.storage.search_blogs(query).await,
        None => state.storage.get_all_blogs().await,
    };
    Json(blogs)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    state
        .storage
        .get_blog(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new_blog): ValidJson<NewBlog>,
) -> (StatusCode, Json<Blog>) {
    (
        StatusCode::CREATED,
        Json(state.storage.create_blog(new_blog).await),
    )
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<UpdateBlog>,
) -> Result<Json<Blog>, ApiError> {
    state
        .storage
        .update_blog(&id, update)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.storage.delete_blog(&id).await {
        return Err(ApiError::not_found(ENTITY));
    }
    Ok(Json(MessageResponse {
        message: "Blog deleted successfully",
    }))
}
