//! # m2dg-crypto
//!
//! Credential primitives for the M2DG platform.
//!
//! ## Security Properties
//!
//! - Passwords are only ever stored as salted Argon2id PHC strings
//! - The salt travels inside the PHC string, so verification needs no side table
//! - No unsafe code

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
pub mod hashing;
pub mod utils;

pub use constants::*;
pub use errors::{CryptoError, Result};
pub use hashing::*;
pub use utils::*;
