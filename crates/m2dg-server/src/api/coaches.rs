use axum::{extract::State, response::Json};
use m2dg_platform::{Coach, CoachCreate, Platform};
use std::sync::Arc;

use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// GET /api/coaches
pub async fn list_coaches(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Coach>>, ApiError> {
    Ok(Json(state.platform.list_coaches().await?))
}

/// POST /api/coaches
pub async fn create_coach_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CoachCreate>,
) -> Result<Json<Coach>, ApiError> {
    Ok(Json(state.platform.create_coach_profile(&user, request).await?))
}
