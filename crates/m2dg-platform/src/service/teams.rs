//! Teams, referral codes and team membership.

use crate::{
    errors::*,
    guards,
    types::*,
    validation::{require_positive, require_text},
};
use m2dg_crypto::{random_code, REFERRAL_CODE_LENGTH};
use m2dg_storage::{BatchExt, Storage, StorageError, CF_TEAMS, CF_TEAMS_BY_REFERRAL_CODE};
use tracing::{info, warn};

use super::{new_id, settle, PlatformService};

/// Attempts at drawing an unused referral code before giving up
const MAX_REFERRAL_CODE_ATTEMPTS: usize = 5;

impl<S: Storage> PlatformService<S> {
    pub(super) async fn list_teams_internal(&self) -> Result<Vec<Team>> {
        Ok(self.storage.scan(CF_TEAMS, MAX_LIST_RESULTS).await?)
    }

    pub(super) async fn get_team_internal(&self, team_id: &str) -> Result<Team> {
        self.storage
            .get(CF_TEAMS, team_id)
            .await?
            .ok_or(PlatformError::NotFound("Team"))
    }

    /// Create a team captained by the actor.
    ///
    /// The referral code index entry is written in the same batch as the team,
    /// conditional on the code being unused.
    pub(super) async fn create_team_internal(
        &self,
        actor: &User,
        request: TeamCreate,
    ) -> Result<Team> {
        require_text("name", &request.name)?;
        require_positive("max_members", request.max_members)?;

        let id = new_id();
        let created_at = self.clock.now();

        for attempt in 1..=MAX_REFERRAL_CODE_ATTEMPTS {
            let team = Team {
                id: id.clone(),
                name: request.name.clone(),
                description: request.description.clone(),
                captain_id: actor.id.clone(),
                members: vec![actor.id.clone()],
                max_members: request.max_members,
                team_logo: request.team_logo.clone(),
                stats: Stats::new(),
                achievements: Vec::new(),
                referral_code: random_code(REFERRAL_CODE_LENGTH),
                is_active: true,
                created_at,
            };

            let mut batch = self.storage.batch();
            batch.require_absent(CF_TEAMS_BY_REFERRAL_CODE, &team.referral_code)?;
            batch.put(CF_TEAMS, &team.id, &team)?;
            batch.put(CF_TEAMS_BY_REFERRAL_CODE, &team.referral_code, &team.id)?;

            match batch.commit().await {
                Ok(()) => {
                    info!(team_id = %team.id, captain_id = %actor.id, "Team created");
                    return Ok(team);
                }
                Err(StorageError::AlreadyExists { .. }) => {
                    warn!(attempt, "Referral code collision, drawing a new code");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(PlatformError::Other(
            "Could not allocate a unique referral code".to_string(),
        ))
    }

    pub(super) async fn join_team_internal(&self, actor: &User, team_id: &str) -> Result<Team> {
        let outcome = self
            .storage
            .update_with(CF_TEAMS, team_id, |team: &mut Team| {
                guards::admit_member(team, &actor.id)?;
                Ok::<_, PlatformError>(team.clone())
            })
            .await?;
        let team = settle(outcome, "Team")?;

        info!(
            team_id = %team.id,
            user_id = %actor.id,
            members = team.members.len(),
            "Joined team"
        );

        Ok(team)
    }

    /// Resolve an exact referral code, then run the membership guard
    pub(super) async fn join_team_by_code_internal(
        &self,
        actor: &User,
        referral_code: &str,
    ) -> Result<Team> {
        let team_id: Option<String> = self
            .storage
            .get(CF_TEAMS_BY_REFERRAL_CODE, referral_code)
            .await?;
        let team_id = team_id.ok_or(PlatformError::NotFound("Team"))?;

        self.join_team_internal(actor, &team_id).await
    }
}
