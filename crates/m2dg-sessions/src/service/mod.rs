//! Token and identity services.

mod resolver;
mod tokens;

pub use resolver::IdentityResolver;
pub use tokens::{TokenService, DEFAULT_ACCESS_TOKEN_TTL_SECONDS};
