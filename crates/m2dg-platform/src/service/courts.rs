//! Court listings.

use crate::{
    errors::*,
    types::*,
    validation::{require_amount, require_positive, require_text},
};
use m2dg_storage::{Storage, CF_COURTS};
use tracing::info;

use super::{new_id, PlatformService};

impl<S: Storage> PlatformService<S> {
    pub(super) async fn list_courts_internal(&self) -> Result<Vec<Court>> {
        Ok(self.storage.scan(CF_COURTS, MAX_LIST_RESULTS).await?)
    }

    pub(super) async fn get_court_internal(&self, court_id: &str) -> Result<Court> {
        self.storage
            .get(CF_COURTS, court_id)
            .await?
            .ok_or(PlatformError::NotFound("Court"))
    }

    pub(super) async fn create_court_internal(&self, request: CourtCreate) -> Result<Court> {
        require_text("name", &request.name)?;
        require_text("location", &request.location)?;
        require_amount("hourly_rate", request.hourly_rate)?;
        require_positive("capacity", request.capacity)?;

        let court = Court {
            id: new_id(),
            name: request.name,
            location: request.location,
            description: request.description,
            court_type: request.court_type,
            surface_type: request.surface_type,
            amenities: request.amenities,
            hourly_rate: request.hourly_rate,
            capacity: request.capacity,
            is_available: true,
            images: request.images,
            created_at: self.clock.now(),
        };

        self.storage.put(CF_COURTS, &court.id, &court).await?;

        info!(court_id = %court.id, name = %court.name, "Court created");

        Ok(court)
    }
}
