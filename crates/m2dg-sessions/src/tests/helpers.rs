//! Test helpers for token and resolver tests.

use crate::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use m2dg_platform::{ManualClock, PlatformService, SystemClock, UserCreate};
use m2dg_storage::RocksDbStorage;
use std::sync::Arc;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";

pub type TestPlatform = PlatformService<RocksDbStorage>;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Token service on a manual clock starting at [`start_time`]
pub fn create_test_token_service() -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let service = TokenService::new(
        TEST_SECRET,
        Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_SECONDS),
        clock.clone(),
    );
    (service, clock)
}

pub fn create_test_platform() -> Arc<TestPlatform> {
    let storage = Arc::new(RocksDbStorage::open_test().unwrap());
    Arc::new(PlatformService::new(storage, Arc::new(SystemClock)))
}

pub fn user_create(email: &str) -> UserCreate {
    UserCreate {
        username: "hooper".to_string(),
        email: email.to_string(),
        password: "swish-swish".to_string(),
        full_name: "Test Hooper".to_string(),
        phone: None,
    }
}
