use axum::{
    extract::{Path, State},
    response::Json,
};
use m2dg_platform::{Court, CourtCreate, Platform};
use std::sync::Arc;

use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// GET /api/courts
pub async fn list_courts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Court>>, ApiError> {
    Ok(Json(state.platform.list_courts().await?))
}

/// POST /api/courts
pub async fn create_court(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CourtCreate>,
) -> Result<Json<Court>, ApiError> {
    let court = state.platform.create_court(request).await?;
    tracing::info!(court_id = %court.id, user_id = %user.id, "Court added via API");
    Ok(Json(court))
}

/// GET /api/courts/:court_id
pub async fn get_court(
    State(state): State<Arc<AppState>>,
    Path(court_id): Path<String>,
) -> Result<Json<Court>, ApiError> {
    Ok(Json(state.platform.get_court(&court_id).await?))
}
