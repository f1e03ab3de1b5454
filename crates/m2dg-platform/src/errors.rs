//! Platform error types.

use m2dg_crypto::CryptoError;
use m2dg_storage::StorageError;
use thiserror::Error;

/// Platform errors
///
/// Guard rejections carry static messages; they are shown to callers as-is.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Referenced entity is absent
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Uniqueness guard rejected the write
    #[error("{0}")]
    AlreadyExists(String),

    /// Actor is already a tournament participant
    #[error("Already registered for this tournament")]
    AlreadyRegistered,

    /// Actor is already a team member
    #[error("Already a member of this team")]
    AlreadyMember,

    /// Capacity guard rejected the write
    #[error("{0} is full")]
    Full(&'static str),

    /// Illegal status transition
    #[error("{0}")]
    InvalidState(String),

    /// Unknown email, missing credential or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Malformed request field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Crypto error
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
