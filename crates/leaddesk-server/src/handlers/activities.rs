//! Activity feed handler

use crate::AppState;
use axum::{extract::State, Json};
use leaddesk_types::Activity;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Activity>> {
    Json(state.storage.get_all_activities().await)
}
