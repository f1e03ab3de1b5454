//! Player challenges.

use crate::{
    errors::*,
    guards,
    types::*,
    validation::{parse_datetime, require_amount, require_text},
};
use m2dg_storage::{Storage, CF_CHALLENGES};
use tracing::info;

use super::{new_id, settle, PlatformService};

impl<S: Storage> PlatformService<S> {
    pub(super) async fn list_challenges_internal(&self) -> Result<Vec<Challenge>> {
        Ok(self.storage.scan(CF_CHALLENGES, MAX_LIST_RESULTS).await?)
    }

    pub(super) async fn create_challenge_internal(
        &self,
        actor: &User,
        request: ChallengeCreate,
    ) -> Result<Challenge> {
        require_text("title", &request.title)?;
        if let Some(wager) = request.wager_amount {
            require_amount("wager_amount", wager)?;
        }
        let scheduled_date = request
            .scheduled_date
            .as_deref()
            .map(|value| parse_datetime("scheduled_date", value))
            .transpose()?;

        let challenge = Challenge {
            id: new_id(),
            title: request.title,
            description: request.description,
            created_by: actor.id.clone(),
            challenged_user: request.challenged_user,
            court_id: request.court_id,
            scheduled_date,
            wager_amount: request.wager_amount,
            status: ChallengeStatus::Open,
            winner: None,
            score: None,
            created_at: self.clock.now(),
        };

        self.storage
            .put(CF_CHALLENGES, &challenge.id, &challenge)
            .await?;

        info!(challenge_id = %challenge.id, created_by = %actor.id, "Challenge created");

        Ok(challenge)
    }

    pub(super) async fn accept_challenge_internal(
        &self,
        actor: &User,
        challenge_id: &str,
    ) -> Result<Challenge> {
        let outcome = self
            .storage
            .update_with(CF_CHALLENGES, challenge_id, |challenge: &mut Challenge| {
                guards::accept_challenge(challenge, &actor.id)?;
                Ok::<_, PlatformError>(challenge.clone())
            })
            .await?;
        let challenge = settle(outcome, "Challenge")?;

        info!(challenge_id = %challenge.id, user_id = %actor.id, "Challenge accepted");

        Ok(challenge)
    }
}
