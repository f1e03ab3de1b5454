pub mod auth;
pub mod bookings;
pub mod challenges;
pub mod coaches;
pub mod courts;
pub mod games;
pub mod health;
pub mod teams;
pub mod tournaments;
pub mod users;

use serde::Serialize;

/// Acknowledgement body for guarded actions
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
