//! Input validation and parsing helpers.

use crate::errors::{PlatformError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Maximum accepted password length, bounds hashing cost
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Ceiling for rates, fees and prize pools
pub const MAX_AMOUNT: f64 = 1_000_000.0;

fn invalid(message: impl Into<String>) -> PlatformError {
    PlatformError::Validation(message.into())
}

/// Validate email address format.
///
/// Checks basic email format requirements:
/// - Contains exactly one @ symbol
/// - Has non-empty local and domain parts
/// - Domain has at least one dot
/// - Length is within RFC 5321 limits (max 254 characters)
pub fn validate_email(email: &str) -> Result<()> {
    if email.len() > 254 {
        return Err(invalid("Email address too long (max 254 characters)"));
    }

    if email.is_empty() {
        return Err(invalid("Email address cannot be empty"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid(
            "Invalid email format: must contain exactly one @ symbol",
        ));
    };
    if domain.contains('@') {
        return Err(invalid(
            "Invalid email format: must contain exactly one @ symbol",
        ));
    }

    if local.is_empty() || local.len() > 64 {
        return Err(invalid("Invalid email: local part must be 1-64 characters"));
    }

    if domain.is_empty() || domain.len() > 253 {
        return Err(invalid("Invalid email: domain must be 1-253 characters"));
    }

    if !domain.contains('.') {
        return Err(invalid("Invalid email: domain must contain at least one dot"));
    }

    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' || c == '+')
    {
        return Err(invalid(
            "Invalid email: local part contains invalid characters",
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(invalid("Invalid email: domain contains invalid characters"));
    }

    Ok(())
}

/// Canonical form used as the credential key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Passwords must be non-empty and at most [`MAX_PASSWORD_LENGTH`] bytes
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(invalid("Password cannot be empty"));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(invalid(format!(
            "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok(())
}

/// Reject blank text fields
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Amounts must lie in `0..=MAX_AMOUNT`; NaN is rejected
pub fn require_amount(field: &str, value: f64) -> Result<()> {
    if !(0.0..=MAX_AMOUNT).contains(&value) {
        return Err(invalid(format!(
            "{field} must be a number between 0 and {MAX_AMOUNT}"
        )));
    }
    Ok(())
}

/// Reject zero counts
pub fn require_positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid(format!("{field} must be at least 1")));
    }
    Ok(())
}

/// Parse a timestamp field.
///
/// Accepts RFC 3339 (`2024-05-01T18:00:00Z`), a naive ISO date-time
/// (`2024-05-01T18:00[:00[.fff]]`, taken as UTC) or a bare date (midnight UTC).
pub fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(invalid(format!("{field} is not a valid date-time")))
}

/// Combine a booking's `YYYY-MM-DD` date and `HH:MM` start time into a UTC instant
pub fn parse_booking_start(date: &str, start_time: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| invalid("date must be formatted as YYYY-MM-DD"))?;

    let start_time = start_time.trim();
    let time = NaiveTime::parse_from_str(start_time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(start_time, "%H:%M:%S"))
        .map_err(|_| invalid("start_time must be formatted as HH:MM"))?;

    Ok(date.and_time(time).and_utc())
}
