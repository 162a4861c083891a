//! Enquiry form handlers

use super::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leaddesk_types::{EnquiryForm, NewEnquiryForm, UpdateEnquiryForm};

const ENTITY: &str = "Enquiry form";

/// Active forms only
pub async fn list(State(state): State<AppState>) -> Json<Vec<EnquiryForm>> {
    Json(state.storage.get_all_enquiry_forms().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EnquiryForm>, ApiError> {
    state
        .storage
        .get_enquiry_form(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new_form): ValidJson<NewEnquiryForm>,
) -> (StatusCode, Json<EnquiryForm>) {
    (
        StatusCode::CREATED,
        Json(state.storage.create_enquiry_form(new_form).await),
    )
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<UpdateEnquiryForm>,
) -> Result<Json<EnquiryForm>, ApiError> {
    state
        .storage
        .update_enquiry_form(&id, update)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.storage.delete_enquiry_form(&id).await {
        return Err(ApiError::not_found(ENTITY));
    }
    Ok(Json(MessageResponse {
        message: "Enquiry form deleted successfully",
    }))
}
