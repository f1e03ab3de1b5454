use m2dg_platform::PlatformError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Bad signature, wrong algorithm, malformed, expired or missing subject
    #[error("Invalid token")]
    InvalidToken,

    /// Resolver could not verify the presented token
    #[error("Not authenticated")]
    Unauthenticated,

    /// Token verified but its subject is not a stored user
    #[error("User not found")]
    UserNotFound,

    /// Requested lifetime puts the expiry outside the representable range
    #[error("Token lifetime out of range")]
    TtlOutOfRange,

    #[error("JWT encoding error: {0}")]
    JwtEncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Platform error: {0}")]
    PlatformError(#[from] PlatformError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
