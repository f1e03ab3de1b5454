use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use m2dg_platform::{Platform, Team, TeamCreate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::MessageResponse;
use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct JoinByCodeQuery {
    pub referral_code: String,
}

#[derive(Debug, Serialize)]
pub struct JoinByCodeResponse {
    pub message: &'static str,
    pub team_name: String,
}

/// GET /api/teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(state.platform.list_teams().await?))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<TeamCreate>,
) -> Result<Json<Team>, ApiError> {
    Ok(Json(state.platform.create_team(&user, request).await?))
}

/// POST /api/teams/:team_id/join
pub async fn join_team(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(team_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.platform.join_team(&user, &team_id).await?;

    Ok(Json(MessageResponse {
        message: "Successfully joined team",
    }))
}

/// POST /api/teams/join-by-code?referral_code=...
pub async fn join_team_by_code(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<JoinByCodeQuery>,
) -> Result<Json<JoinByCodeResponse>, ApiError> {
    let team = state
        .platform
        .join_team_by_code(&user, &query.referral_code)
        .await?;

    Ok(Json(JoinByCodeResponse {
        message: "Successfully joined team",
        team_name: team.name,
    }))
}
