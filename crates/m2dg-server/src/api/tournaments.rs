use axum::{
    extract::{Path, State},
    response::Json,
};
use m2dg_platform::{Platform, Tournament, TournamentCreate};
use std::sync::Arc;

use super::MessageResponse;
use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// GET /api/tournaments
pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    Ok(Json(state.platform.list_tournaments().await?))
}

/// POST /api/tournaments
pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<TournamentCreate>,
) -> Result<Json<Tournament>, ApiError> {
    Ok(Json(state.platform.create_tournament(&user, request).await?))
}

/// POST /api/tournaments/:tournament_id/register
pub async fn register_for_tournament(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(tournament_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .platform
        .register_for_tournament(&user, &tournament_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Successfully registered for tournament",
    }))
}
