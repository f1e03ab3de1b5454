//! Platform trait definitions.

use crate::{errors::Result, types::*};
use async_trait::async_trait;

/// Platform subsystem trait
///
/// Operations taking an `actor` expect an already authenticated user.
#[async_trait]
pub trait Platform: Send + Sync {
    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Create a user and its password credential (email must be unused)
    async fn register(&self, request: UserCreate) -> Result<User>;

    /// Check an email/password pair
    async fn authenticate(&self, email: &str, password: &str) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, user_id: &str) -> Result<User>;

    /// Single point lookup, `None` if the user does not exist
    async fn find_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Merge profile fields into the stored user
    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    // ------------------------------------------------------------------
    // Courts
    // ------------------------------------------------------------------

    async fn list_courts(&self) -> Result<Vec<Court>>;

    async fn get_court(&self, court_id: &str) -> Result<Court>;

    async fn create_court(&self, request: CourtCreate) -> Result<Court>;

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// Book a court; the cost is derived from the court's hourly rate
    async fn create_booking(&self, actor: &User, request: BookingCreate) -> Result<Booking>;

    async fn list_bookings_for_user(&self, actor: &User) -> Result<Vec<Booking>>;

    // ------------------------------------------------------------------
    // Tournaments
    // ------------------------------------------------------------------

    async fn list_tournaments(&self) -> Result<Vec<Tournament>>;

    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament>;

    async fn create_tournament(&self, actor: &User, request: TournamentCreate)
        -> Result<Tournament>;

    /// Join a tournament (registration guard)
    async fn register_for_tournament(&self, actor: &User, tournament_id: &str)
        -> Result<Tournament>;

    // ------------------------------------------------------------------
    // Challenges
    // ------------------------------------------------------------------

    async fn list_challenges(&self) -> Result<Vec<Challenge>>;

    async fn create_challenge(&self, actor: &User, request: ChallengeCreate) -> Result<Challenge>;

    /// Accept an open challenge (transition guard)
    async fn accept_challenge(&self, actor: &User, challenge_id: &str) -> Result<Challenge>;

    // ------------------------------------------------------------------
    // Teams
    // ------------------------------------------------------------------

    async fn list_teams(&self) -> Result<Vec<Team>>;

    async fn get_team(&self, team_id: &str) -> Result<Team>;

    async fn create_team(&self, actor: &User, request: TeamCreate) -> Result<Team>;

    /// Join a team by ID (membership guard)
    async fn join_team(&self, actor: &User, team_id: &str) -> Result<Team>;

    /// Join a team by its exact referral code (membership guard)
    async fn join_team_by_code(&self, actor: &User, referral_code: &str) -> Result<Team>;

    // ------------------------------------------------------------------
    // Coaches
    // ------------------------------------------------------------------

    async fn list_coaches(&self) -> Result<Vec<Coach>>;

    /// Create the actor's coach profile and mark them as a coach
    async fn create_coach_profile(&self, actor: &User, request: CoachCreate) -> Result<Coach>;

    // ------------------------------------------------------------------
    // Games
    // ------------------------------------------------------------------

    async fn create_game(&self, actor: &User, request: GameCreate) -> Result<Game>;

    /// Overwrite score, status, winner and stats of a game
    async fn update_game_score(&self, game_id: &str, update: ScoreUpdate) -> Result<Game>;

    /// Games where the actor is player 1 or player 2
    async fn list_games_for_user(&self, actor: &User) -> Result<Vec<Game>>;
}
