//! Test helpers for platform service tests.

use crate::*;
use m2dg_storage::RocksDbStorage;
use std::sync::Arc;

pub type TestPlatform = PlatformService<RocksDbStorage>;

/// Platform backed by a throwaway RocksDB directory
pub fn create_test_platform() -> Arc<TestPlatform> {
    let storage = Arc::new(RocksDbStorage::open_test().unwrap());
    Arc::new(PlatformService::new(storage, Arc::new(SystemClock)))
}

pub fn user_create(email: &str) -> UserCreate {
    UserCreate {
        username: email.split('@').next().unwrap_or("player").to_string(),
        email: email.to_string(),
        password: "correct horse battery staple".to_string(),
        full_name: "Test Player".to_string(),
        phone: None,
    }
}

pub async fn create_test_user(platform: &TestPlatform, email: &str) -> User {
    platform.register(user_create(email)).await.unwrap()
}

pub fn court_create(hourly_rate: f64) -> CourtCreate {
    CourtCreate {
        name: "Downtown Court".to_string(),
        location: "123 Main St".to_string(),
        description: None,
        court_type: "indoor".to_string(),
        surface_type: "hardwood".to_string(),
        amenities: vec!["lockers".to_string()],
        hourly_rate,
        capacity: 10,
        images: vec![],
    }
}

pub fn tournament_create(max_participants: u32) -> TournamentCreate {
    TournamentCreate {
        name: "Summer Slam".to_string(),
        description: None,
        start_date: "2024-07-01T09:00:00Z".to_string(),
        end_date: "2024-07-03T18:00:00Z".to_string(),
        entry_fee: 20.0,
        max_participants,
        prize_pool: 1000.0,
        rules: vec![],
    }
}

pub fn team_create(max_members: u32) -> TeamCreate {
    TeamCreate {
        name: "Ballers".to_string(),
        description: None,
        max_members,
        team_logo: None,
    }
}

pub fn challenge_create() -> ChallengeCreate {
    ChallengeCreate {
        title: "1v1 at noon".to_string(),
        description: None,
        challenged_user: None,
        court_id: None,
        scheduled_date: Some("2024-06-01T12:00".to_string()),
        wager_amount: Some(5.0),
    }
}

pub fn coach_create() -> CoachCreate {
    CoachCreate {
        specialties: vec!["shooting".to_string()],
        experience_years: 4,
        certifications: vec![],
        hourly_rate: 40.0,
        bio: None,
        availability: Default::default(),
    }
}
