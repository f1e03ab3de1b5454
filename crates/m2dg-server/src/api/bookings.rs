use axum::{extract::State, response::Json};
use m2dg_platform::{Booking, BookingCreate, Platform};
use std::sync::Arc;

use crate::{error::ApiError, extractors::CurrentUser, state::AppState};

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<BookingCreate>,
) -> Result<Json<Booking>, ApiError> {
    Ok(Json(state.platform.create_booking(&user, request).await?))
}

/// GET /api/bookings/me
pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Booking>>, ApiError> {
    Ok(Json(state.platform.list_bookings_for_user(&user).await?))
}
