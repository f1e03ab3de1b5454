//! Cryptographic constants.

/// Argon2id parameters for password hashing
pub mod argon2_params {
    use argon2::{Params, Version};

    /// Memory cost: 19 MiB
    pub const MEMORY_COST: u32 = 19 * 1024;

    /// Time cost: 2 iterations
    pub const TIME_COST: u32 = 2;

    /// Parallelism: 1 thread
    pub const PARALLELISM: u32 = 1;

    /// Output length: 32 bytes
    pub const OUTPUT_LENGTH: usize = 32;

    /// Get Argon2id parameters
    pub fn get_params() -> Result<Params, argon2::Error> {
        Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LENGTH))
    }

    /// Argon2 version
    pub const VERSION: Version = Version::V0x13;
}

/// Length of a booking access code
pub const ACCESS_CODE_LENGTH: usize = 8;

/// Length of a team referral code
pub const REFERRAL_CODE_LENGTH: usize = 6;

/// Hash verified against when a login names an unknown account, so that
/// unknown-account and wrong-password attempts cost the same.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$aGVsbG93b3JsZA$0123456789abcdef0123456789abcdef";
