//! Video handlers

use super::{MessageResponse, SearchParams};
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use leaddesk_types::{NewVideo, UpdateVideo, Video};

const ENTITY: &str = "Video";

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Video>> {
    let videos = match params.query() {
        Some(query) => state.storage.search_videos(query).await,
        None => state.storage.get_all_videos().await,
    };
    Json(videos)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    state
        .storage
        .get_video(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new_video): ValidJson<NewVideo>,
) -> (StatusCode, Json<Video>) {
    (
        StatusCode::CREATED,
        Json(state.storage.create_video(new_video).await),
    )
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<UpdateVideo>,
) -> Result<Json<Video>, ApiError> {
    state
        .storage
        .update_video(&id, update)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.storage.delete_video(&id).await {
        return Err(ApiError::not_found(ENTITY));
    }
    Ok(Json(MessageResponse {
        message: "Video deleted successfully",
    }))
}
