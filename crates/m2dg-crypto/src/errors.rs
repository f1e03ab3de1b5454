//! Cryptographic error types.

use thiserror::Error;

/// Cryptographic operation errors
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Argon2 hashing or verification failed
    #[error("Argon2 operation failed: {0}")]
    Argon2Failed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
