//! Platform type definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Upper bound on the number of documents any listing operation returns
pub const MAX_LIST_RESULTS: usize = 1000;

/// Default team size when the creator does not pick one
pub const DEFAULT_TEAM_MAX_MEMBERS: u32 = 15;

/// Longest single court booking
pub const MAX_BOOKING_HOURS: u32 = 24;

/// Free-form statistics attached to users, teams and games
pub type Stats = serde_json::Map<String, serde_json::Value>;

/// Per-side score of a challenge or game, keyed by player or team id
pub type ScoreMap = BTreeMap<String, i64>;

// ============================================================================
// Status enums
// ============================================================================

/// Booking lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Tournament lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

/// Challenge lifecycle
///
/// Only `Open` challenges can be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    Open,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

// ============================================================================
// Stored records
// ============================================================================

/// User record
///
/// Never carries the password hash; that lives in [`PasswordCredential`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub is_coach: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Password credential, keyed by lowercased email
#[derive(Clone, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("user_id", &self.user_id)
            .field("password_hash", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Court record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub court_type: String,
    pub surface_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub hourly_rate: f64,
    pub capacity: u32,
    pub is_available: bool,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub court_id: String,
    /// Calendar day of `start_time`
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_hours: u32,
    /// `hourly_rate * duration_hours` of the court at booking time
    pub total_cost: f64,
    pub status: BookingStatus,
    /// Short code presented at the court entrance
    #[serde(rename = "rfid_code")]
    pub access_code: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tournament record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub entry_fee: f64,
    pub max_participants: u32,
    pub current_participants: u32,
    pub prize_pool: f64,
    #[serde(default)]
    pub rules: Vec<String>,
    pub status: TournamentStatus,
    #[serde(default)]
    pub bracket: Option<serde_json::Value>,
    #[serde(default)]
    pub participants: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Challenge record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: String,
    #[serde(default)]
    pub challenged_user: Option<String>,
    #[serde(default)]
    pub court_id: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub wager_amount: Option<f64>,
    pub status: ChallengeStatus,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub score: Option<ScoreMap>,
    pub created_at: DateTime<Utc>,
}

/// Team record
///
/// The captain is always a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub captain_id: String,
    pub members: Vec<String>,
    pub max_members: u32,
    #[serde(default)]
    pub team_logo: Option<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub referral_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Coach profile, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub experience_years: u32,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub bio: Option<String>,
    /// Weekday -> time slots
    #[serde(default)]
    pub availability: HashMap<String, Vec<String>>,
    pub rating: f64,
    pub total_reviews: u32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Game record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub player1_id: Option<String>,
    #[serde(default)]
    pub player2_id: Option<String>,
    #[serde(default)]
    pub team1_id: Option<String>,
    #[serde(default)]
    pub team2_id: Option<String>,
    pub court_id: String,
    #[serde(default)]
    pub tournament_id: Option<String>,
    #[serde(default)]
    pub challenge_id: Option<String>,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub actual_start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: ScoreMap,
    #[serde(default)]
    pub winner: Option<String>,
    pub game_type: String,
    pub status: GameStatus,
    #[serde(default)]
    pub stats: Stats,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Requests
// ============================================================================

/// Registration request
///
/// No `Debug` impl so the password cannot end up in logs.
#[derive(Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Login request
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update
///
/// Absent fields keep their stored value. Fields outside this set
/// (email, coach flag, timestamps) are ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub experience_level: Option<String>,
    pub bio: Option<String>,
    pub stats: Option<Stats>,
    pub achievements: Option<Vec<String>>,
}

impl UserUpdate {
    /// Merge the present fields into `user`
    pub fn apply_to(self, user: &mut User, now: DateTime<Utc>) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut user.full_name, self.full_name);
        merge(&mut user.phone, self.phone.map(Some));
        merge(&mut user.profile_picture, self.profile_picture.map(Some));
        merge(&mut user.position, self.position.map(Some));
        merge(&mut user.height, self.height.map(Some));
        merge(&mut user.weight, self.weight.map(Some));
        merge(&mut user.experience_level, self.experience_level.map(Some));
        merge(&mut user.bio, self.bio.map(Some));
        merge(&mut user.stats, self.stats);
        merge(&mut user.achievements, self.achievements);
        user.updated_at = now;
    }
}

/// Create court request
#[derive(Debug, Clone, Deserialize)]
pub struct CourtCreate {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub court_type: String,
    pub surface_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub hourly_rate: f64,
    pub capacity: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Create booking request
///
/// `date` is `YYYY-MM-DD`, `start_time` is `HH:MM` (UTC).
#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    pub court_id: String,
    pub date: String,
    pub start_time: String,
    pub duration_hours: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Create tournament request
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub entry_fee: f64,
    pub max_participants: u32,
    pub prize_pool: f64,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Create challenge request
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub challenged_user: Option<String>,
    #[serde(default)]
    pub court_id: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub wager_amount: Option<f64>,
}

fn default_team_max_members() -> u32 {
    DEFAULT_TEAM_MAX_MEMBERS
}

/// Create team request
#[derive(Debug, Clone, Deserialize)]
pub struct TeamCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_team_max_members")]
    pub max_members: u32,
    #[serde(default)]
    pub team_logo: Option<String>,
}

/// Create coach profile request
#[derive(Debug, Clone, Deserialize)]
pub struct CoachCreate {
    #[serde(default)]
    pub specialties: Vec<String>,
    pub experience_years: u32,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub availability: HashMap<String, Vec<String>>,
}

/// Create game request
#[derive(Debug, Clone, Deserialize)]
pub struct GameCreate {
    /// Defaults to the creating user
    #[serde(default)]
    pub player1_id: Option<String>,
    #[serde(default)]
    pub player2_id: Option<String>,
    #[serde(default)]
    pub team1_id: Option<String>,
    #[serde(default)]
    pub team2_id: Option<String>,
    pub court_id: String,
    #[serde(default)]
    pub tournament_id: Option<String>,
    #[serde(default)]
    pub challenge_id: Option<String>,
    pub scheduled_date: String,
    pub game_type: String,
}

/// Score update for a game
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreUpdate {
    pub score: ScoreMap,
    #[serde(default)]
    pub status: Option<GameStatus>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub stats: Option<Stats>,
}
