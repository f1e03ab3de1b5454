//! Password hashing using Argon2id.

use crate::{constants::*, errors::*};
use argon2::password_hash::{Error as PasswordHashError, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

fn argon2id() -> Result<Argon2<'static>> {
    let params =
        argon2_params::get_params().map_err(|e| CryptoError::Argon2Failed(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2_params::VERSION,
        params,
    ))
}

/// Derive the stored form of a password: an Argon2id PHC string carrying
/// its own parameters and salt.
pub fn hash_password(password: &[u8], salt: &SaltString) -> Result<String> {
    argon2id()?
        .hash_password(password, salt)
        .map(|phc| phc.to_string())
        .map_err(|e| CryptoError::Argon2Failed(e.to_string()))
}

/// Check `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparseable stored value is an error.
pub fn verify_password(password: &[u8], stored: &str) -> Result<bool> {
    let stored = PasswordHash::new(stored).map_err(|_| CryptoError::InvalidHashFormat)?;

    match argon2id()?.verify_password(password, &stored) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(CryptoError::Argon2Failed(e.to_string())),
    }
}

/// Fresh salt from the thread-local CSPRNG
pub fn generate_salt() -> SaltString {
    SaltString::generate(&mut rand::thread_rng())
}
