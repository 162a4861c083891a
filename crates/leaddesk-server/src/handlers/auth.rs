//! Authentication handlers

use crate::error::ApiError;
use crate::services::auth::LoginUser;
use crate::AppState;
use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    success: bool,
    message: &'static str,
    user: LoginUser,
}

pub async fn login(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    info!("Login attempt for: {}", req.username);

    let ip_address = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok());

    let user = state
        .auth_service
        .login(&req.username, &req.password, ip_address.as_deref(), user_agent)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        user,
    }))
}
