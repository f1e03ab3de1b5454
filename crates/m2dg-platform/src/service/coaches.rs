//! Coach profiles.

use crate::{
    errors::*,
    types::*,
    validation::require_amount,
};
use m2dg_storage::{BatchExt, Storage, StorageError, CF_COACHES, CF_COACHES_BY_USER, CF_USERS};
use std::convert::Infallible;
use tracing::{error, info};

use super::{new_id, PlatformService};

impl<S: Storage> PlatformService<S> {
    pub(super) async fn list_coaches_internal(&self) -> Result<Vec<Coach>> {
        Ok(self.storage.scan(CF_COACHES, MAX_LIST_RESULTS).await?)
    }

    /// Create the actor's coach profile, then set `is_coach` on the user.
    ///
    /// The profile and its per-user index entry are inserted atomically, so a
    /// user can never own two profiles. Flagging the user is a second write:
    /// if it fails the profile stays in place and the error is returned.
    pub(super) async fn create_coach_profile_internal(
        &self,
        actor: &User,
        request: CoachCreate,
    ) -> Result<Coach> {
        require_amount("hourly_rate", request.hourly_rate)?;

        let coach = Coach {
            id: new_id(),
            user_id: actor.id.clone(),
            specialties: request.specialties,
            experience_years: request.experience_years,
            certifications: request.certifications,
            hourly_rate: request.hourly_rate,
            bio: request.bio,
            availability: request.availability,
            rating: 0.0,
            total_reviews: 0,
            is_available: true,
            created_at: self.clock.now(),
        };

        let mut batch = self.storage.batch();
        batch.require_absent(CF_COACHES_BY_USER, &actor.id)?;
        batch.put(CF_COACHES, &coach.id, &coach)?;
        batch.put(CF_COACHES_BY_USER, &actor.id, &coach.id)?;
        batch.commit().await.map_err(|e| match e {
            StorageError::AlreadyExists { .. } => {
                PlatformError::AlreadyExists("Coach profile already exists".to_string())
            }
            other => other.into(),
        })?;

        info!(coach_id = %coach.id, user_id = %actor.id, "Coach profile created");

        // TODO: compensate by removing the profile once storage grows a delete operation
        let now = self.clock.now();
        let flagged = self
            .storage
            .update_with(CF_USERS, &actor.id, |user: &mut User| {
                user.is_coach = true;
                user.updated_at = now;
                Ok::<_, Infallible>(())
            })
            .await;

        match flagged {
            Ok(Some(_)) => Ok(coach),
            Ok(None) => {
                error!(
                    coach_id = %coach.id,
                    user_id = %actor.id,
                    "Coach profile created but user record is gone"
                );
                Err(PlatformError::NotFound("User"))
            }
            Err(e) => {
                error!(
                    coach_id = %coach.id,
                    user_id = %actor.id,
                    error = %e,
                    "Coach profile created but coach flag update failed"
                );
                Err(e.into())
            }
        }
    }
}
