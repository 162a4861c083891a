//! Login history handlers

use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use leaddesk_types::LoginHistory;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<LoginHistory>> {
    let history = match params.user_id.as_deref().filter(|id| !id.is_empty()) {
        Some(user_id) => state.storage.get_user_login_history(user_id).await,
        None => state.storage.get_all_login_history().await,
    };
    Json(history)
}
