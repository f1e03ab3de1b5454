use axum::{extract::State, response::Json};
use m2dg_platform::{Platform, User, UserUpdate};
use std::sync::Arc;

use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// GET /api/users/me
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    let updated = state.platform.update_profile(&user.id, update).await?;
    Ok(Json(updated))
}
