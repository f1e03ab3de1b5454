//! Collection (column family) names.

/// User records: user_id → User
pub const CF_USERS: &str = "users";

/// Password credentials: lowercase email → PasswordCredential
pub const CF_CREDENTIALS: &str = "credentials";

/// Courts: court_id → Court
pub const CF_COURTS: &str = "courts";

/// Bookings: booking_id → Booking
pub const CF_BOOKINGS: &str = "bookings";

/// Tournaments: tournament_id → Tournament
pub const CF_TOURNAMENTS: &str = "tournaments";

/// Challenges: challenge_id → Challenge
pub const CF_CHALLENGES: &str = "challenges";

/// Teams: team_id → Team
pub const CF_TEAMS: &str = "teams";

/// Teams by referral code index: referral_code → team_id
pub const CF_TEAMS_BY_REFERRAL_CODE: &str = "teams_by_referral_code";

/// Coach profiles: coach_id → Coach
pub const CF_COACHES: &str = "coaches";

/// Coach profiles by user index: user_id → coach_id
pub const CF_COACHES_BY_USER: &str = "coaches_by_user";

/// Games: game_id → Game
pub const CF_GAMES: &str = "games";

/// Get all column family names
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        CF_USERS,
        CF_CREDENTIALS,
        CF_COURTS,
        CF_BOOKINGS,
        CF_TOURNAMENTS,
        CF_CHALLENGES,
        CF_TEAMS,
        CF_TEAMS_BY_REFERRAL_CODE,
        CF_COACHES,
        CF_COACHES_BY_USER,
        CF_GAMES,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_column_families_non_empty() {
        let cfs = all_column_families();
        assert!(!cfs.is_empty());
    }

    #[test]
    fn test_no_duplicate_column_families() {
        let cfs = all_column_families();
        let mut unique = std::collections::HashSet::new();

        for cf in &cfs {
            assert!(unique.insert(cf), "Duplicate column family: {}", cf);
        }
    }
}
