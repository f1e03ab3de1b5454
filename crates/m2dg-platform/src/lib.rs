//! # m2dg-platform
//!
//! Domain services for the M2DG basketball platform.
//!
//! This crate owns:
//! - Accounts and the password credential store
//! - Courts, bookings, tournaments, challenges, teams, coach profiles and games
//! - The resource guards that protect capacity, membership and status
//!   transitions against concurrent requests

#![warn(clippy::all)]

pub mod clock;
pub mod errors;
pub mod guards;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{PlatformError, Result};
pub use service::PlatformService;
pub use traits::Platform;
pub use types::*;
