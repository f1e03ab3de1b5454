//! # m2dg-sessions
//!
//! Stateless bearer tokens for the M2DG platform.
//!
//! - [`TokenService`] signs and verifies HS256 JWTs carrying a subject and an
//!   absolute expiry, checked against an injected clock
//! - [`IdentityResolver`] turns a bearer token into the stored [`User`]
//!   with exactly one storage read
//!
//! [`User`]: m2dg_platform::User

#![warn(clippy::all)]

pub mod errors;
mod service;
pub mod types;


pub use errors::*;
pub use service::{IdentityResolver, TokenService, DEFAULT_ACCESS_TOKEN_TTL_SECONDS};
pub use types::*;
