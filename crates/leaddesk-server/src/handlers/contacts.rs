//! Contact message handlers

use crate::extractors::ValidJson;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use leaddesk_types::{Contact, NewContact};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.storage.get_all_contacts().await)
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new_contact): ValidJson<NewContact>,
) -> (StatusCode, Json<Contact>) {
    let contact = state.storage.create_contact(new_contact).await;
    info!("Contact message received: {}", contact.id);
    (StatusCode::CREATED, Json(contact))
}
