//! Tournaments and tournament registration.

use crate::{
    errors::*,
    guards,
    types::*,
    validation::{parse_datetime, require_amount, require_positive, require_text},
};
use m2dg_storage::{Storage, CF_TOURNAMENTS};
use tracing::info;

use super::{new_id, settle, PlatformService};

impl<S: Storage> PlatformService<S> {
    pub(super) async fn list_tournaments_internal(&self) -> Result<Vec<Tournament>> {
        Ok(self.storage.scan(CF_TOURNAMENTS, MAX_LIST_RESULTS).await?)
    }

    pub(super) async fn get_tournament_internal(&self, tournament_id: &str) -> Result<Tournament> {
        self.storage
            .get(CF_TOURNAMENTS, tournament_id)
            .await?
            .ok_or(PlatformError::NotFound("Tournament"))
    }

    pub(super) async fn create_tournament_internal(
        &self,
        actor: &User,
        request: TournamentCreate,
    ) -> Result<Tournament> {
        require_text("name", &request.name)?;
        require_amount("entry_fee", request.entry_fee)?;
        require_amount("prize_pool", request.prize_pool)?;
        require_positive("max_participants", request.max_participants)?;

        let start_date = parse_datetime("start_date", &request.start_date)?;
        let end_date = parse_datetime("end_date", &request.end_date)?;
        if end_date < start_date {
            return Err(PlatformError::Validation(
                "end_date must not be before start_date".to_string(),
            ));
        }

        let tournament = Tournament {
            id: new_id(),
            name: request.name,
            description: request.description,
            start_date,
            end_date,
            entry_fee: request.entry_fee,
            max_participants: request.max_participants,
            current_participants: 0,
            prize_pool: request.prize_pool,
            rules: request.rules,
            status: TournamentStatus::Upcoming,
            bracket: None,
            participants: Vec::new(),
            created_by: actor.id.clone(),
            created_at: self.clock.now(),
        };

        self.storage
            .put(CF_TOURNAMENTS, &tournament.id, &tournament)
            .await?;

        info!(tournament_id = %tournament.id, created_by = %actor.id, "Tournament created");

        Ok(tournament)
    }

    /// Registration guard and the participant append run as one atomic update
    pub(super) async fn register_for_tournament_internal(
        &self,
        actor: &User,
        tournament_id: &str,
    ) -> Result<Tournament> {
        let outcome = self
            .storage
            .update_with(CF_TOURNAMENTS, tournament_id, |tournament: &mut Tournament| {
                guards::register_participant(tournament, &actor.id)?;
                Ok::<_, PlatformError>(tournament.clone())
            })
            .await?;
        let tournament = settle(outcome, "Tournament")?;

        info!(
            tournament_id = %tournament.id,
            user_id = %actor.id,
            participants = tournament.current_participants,
            "Registered for tournament"
        );

        Ok(tournament)
    }
}
