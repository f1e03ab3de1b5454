use axum::{extract::State, response::Json};
use m2dg_platform::{LoginRequest, Platform, UserCreate};
use serde::Serialize;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UserCreate>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state.platform.register(request).await?;
    let issued = state.tokens.issue(&user.id, None)?;

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: issued.token_type,
        user_id: user.id,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .platform
        .authenticate(&request.email, &request.password)
        .await?;
    let issued = state.tokens.issue(&user.id, None)?;

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: issued.token_type,
        user_id: user.id,
    }))
}
