//! Court bookings.

use crate::{
    errors::*,
    types::*,
    validation::{parse_booking_start, require_positive},
};
use chrono::Duration;
use m2dg_crypto::{random_code, ACCESS_CODE_LENGTH};
use m2dg_storage::{Storage, CF_BOOKINGS};
use tracing::info;

use super::{new_id, PlatformService};

impl<S: Storage> PlatformService<S> {
    /// Book a court for the actor.
    ///
    /// The cost is always computed from the court's stored hourly rate.
    pub(super) async fn create_booking_internal(
        &self,
        actor: &User,
        request: BookingCreate,
    ) -> Result<Booking> {
        require_positive("duration_hours", request.duration_hours)?;
        if request.duration_hours > MAX_BOOKING_HOURS {
            return Err(PlatformError::Validation(format!(
                "duration_hours must be at most {MAX_BOOKING_HOURS}"
            )));
        }
        let start_time = parse_booking_start(&request.date, &request.start_time)?;
        let end_time = start_time
            .checked_add_signed(Duration::hours(i64::from(request.duration_hours)))
            .ok_or_else(|| PlatformError::Validation("Booking ends out of range".to_string()))?;

        let court = self.get_court_internal(&request.court_id).await?;

        // Stored documents must round-trip through JSON, which has no infinity
        let total_cost = court.hourly_rate * f64::from(request.duration_hours);
        if !total_cost.is_finite() {
            return Err(PlatformError::Validation(
                "total_cost is out of range".to_string(),
            ));
        }

        let booking = Booking {
            id: new_id(),
            user_id: actor.id.clone(),
            court_id: court.id,
            date: start_time.date_naive(),
            start_time,
            end_time,
            duration_hours: request.duration_hours,
            total_cost,
            status: BookingStatus::Pending,
            access_code: random_code(ACCESS_CODE_LENGTH),
            special_requests: request.special_requests,
            created_at: self.clock.now(),
        };

        self.storage.put(CF_BOOKINGS, &booking.id, &booking).await?;

        info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            court_id = %booking.court_id,
            total_cost = booking.total_cost,
            "Booking created"
        );

        Ok(booking)
    }

    pub(super) async fn list_bookings_for_user_internal(&self, actor: &User) -> Result<Vec<Booking>> {
        Ok(self
            .storage
            .find_by_field(
                CF_BOOKINGS,
                "user_id",
                &serde_json::Value::String(actor.id.clone()),
                MAX_LIST_RESULTS,
            )
            .await?)
    }
}
