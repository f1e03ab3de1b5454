use axum::{
    extract::{Path, State},
    response::Json,
};
use m2dg_platform::{Challenge, ChallengeCreate, Platform};
use std::sync::Arc;

use super::MessageResponse;
use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// GET /api/challenges
pub async fn list_challenges(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Challenge>>, ApiError> {
    Ok(Json(state.platform.list_challenges().await?))
}

/// POST /api/challenges
pub async fn create_challenge(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ChallengeCreate>,
) -> Result<Json<Challenge>, ApiError> {
    Ok(Json(state.platform.create_challenge(&user, request).await?))
}

/// POST /api/challenges/:challenge_id/accept
pub async fn accept_challenge(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(challenge_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.platform.accept_challenge(&user, &challenge_id).await?;

    Ok(Json(MessageResponse {
        message: "Challenge accepted",
    }))
}
