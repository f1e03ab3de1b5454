//! Platform service implementation.

mod accounts;
mod bookings;
mod challenges;
mod coaches;
mod courts;
mod games;
mod teams;
mod tournaments;

use crate::{clock::Clock, errors::*, traits::*, types::*};
use async_trait::async_trait;
use m2dg_storage::Storage;
use std::sync::Arc;
use uuid::Uuid;

/// Platform service implementation
pub struct PlatformService<S: Storage> {
    pub(super) storage: Arc<S>,
    pub(super) clock: Arc<dyn Clock>,
}

impl<S: Storage> PlatformService<S> {
    /// Create a new platform service
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

/// Fresh opaque entity identifier
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Flatten the outcome of `Storage::update_with`, mapping an absent key to `NotFound`
pub(crate) fn settle<T>(outcome: Option<Result<T>>, entity: &'static str) -> Result<T> {
    match outcome {
        Some(result) => result,
        None => Err(PlatformError::NotFound(entity)),
    }
}

#[async_trait]
impl<S: Storage> Platform for PlatformService<S> {
    async fn register(&self, request: UserCreate) -> Result<User> {
        self.register_internal(request).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.authenticate_internal(email, password).await
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.find_user_internal(user_id)
            .await?
            .ok_or(PlatformError::NotFound("User"))
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<User>> {
        self.find_user_internal(user_id).await
    }

    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        self.update_profile_internal(user_id, update).await
    }

    async fn list_courts(&self) -> Result<Vec<Court>> {
        self.list_courts_internal().await
    }

    async fn get_court(&self, court_id: &str) -> Result<Court> {
        self.get_court_internal(court_id).await
    }

    async fn create_court(&self, request: CourtCreate) -> Result<Court> {
        self.create_court_internal(request).await
    }

    async fn create_booking(&self, actor: &User, request: BookingCreate) -> Result<Booking> {
        self.create_booking_internal(actor, request).await
    }

    async fn list_bookings_for_user(&self, actor: &User) -> Result<Vec<Booking>> {
        self.list_bookings_for_user_internal(actor).await
    }

    async fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        self.list_tournaments_internal().await
    }

    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament> {
        self.get_tournament_internal(tournament_id).await
    }

    async fn create_tournament(
        &self,
        actor: &User,
        request: TournamentCreate,
    ) -> Result<Tournament> {
        self.create_tournament_internal(actor, request).await
    }

    async fn register_for_tournament(
        &self,
        actor: &User,
        tournament_id: &str,
    ) -> Result<Tournament> {
        self.register_for_tournament_internal(actor, tournament_id)
            .await
    }

    async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        self.list_challenges_internal().await
    }

    async fn create_challenge(&self, actor: &User, request: ChallengeCreate) -> Result<Challenge> {
        self.create_challenge_internal(actor, request).await
    }

    async fn accept_challenge(&self, actor: &User, challenge_id: &str) -> Result<Challenge> {
        self.accept_challenge_internal(actor, challenge_id).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.list_teams_internal().await
    }

    async fn get_team(&self, team_id: &str) -> Result<Team> {
        self.get_team_internal(team_id).await
    }

    async fn create_team(&self, actor: &User, request: TeamCreate) -> Result<Team> {
        self.create_team_internal(actor, request).await
    }

    async fn join_team(&self, actor: &User, team_id: &str) -> Result<Team> {
        self.join_team_internal(actor, team_id).await
    }

    async fn join_team_by_code(&self, actor: &User, referral_code: &str) -> Result<Team> {
        self.join_team_by_code_internal(actor, referral_code).await
    }

    async fn list_coaches(&self) -> Result<Vec<Coach>> {
        self.list_coaches_internal().await
    }

    async fn create_coach_profile(&self, actor: &User, request: CoachCreate) -> Result<Coach> {
        self.create_coach_profile_internal(actor, request).await
    }

    async fn create_game(&self, actor: &User, request: GameCreate) -> Result<Game> {
        self.create_game_internal(actor, request).await
    }

    async fn update_game_score(&self, game_id: &str, update: ScoreUpdate) -> Result<Game> {
        self.update_game_score_internal(game_id, update).await
    }

    async fn list_games_for_user(&self, actor: &User) -> Result<Vec<Game>> {
        self.list_games_for_user_internal(actor).await
    }
}
