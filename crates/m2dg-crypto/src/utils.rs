//! Random code helpers.

use uuid::Uuid;

/// Generate a short uppercase code of `len` hexadecimal characters
///
/// Codes come from a fresh v4 UUID, so `len` is capped at 32.
pub fn random_code(len: usize) -> String {
    let mut code = Uuid::new_v4().simple().to_string().to_uppercase();
    code.truncate(len.min(32));
    code
}
