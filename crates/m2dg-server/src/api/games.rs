use axum::{
    extract::{Path, State},
    response::Json,
};
use m2dg_platform::{Game, GameCreate, Platform, ScoreUpdate};
use std::sync::Arc;

use super::MessageResponse;
use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// POST /api/games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<GameCreate>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.platform.create_game(&user, request).await?))
}

/// PUT /api/games/:game_id/score
pub async fn update_score(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(game_id): Path<String>,
    Json(update): Json<ScoreUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    let game = state.platform.update_game_score(&game_id, update).await?;
    tracing::info!(game_id = %game.id, user_id = %user.id, "Score submitted");

    Ok(Json(MessageResponse {
        message: "Score updated successfully",
    }))
}

/// GET /api/games/me
pub async fn my_games(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(state.platform.list_games_for_user(&user).await?))
}
