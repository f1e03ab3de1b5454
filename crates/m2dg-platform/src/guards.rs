//! Resource guards.
//!
//! Each guard checks a precondition and applies its mutation to a freshly read
//! document. Services run them inside `Storage::update_with`, so the check and
//! the write see the same committed state and a rejected guard writes nothing.

use crate::errors::{PlatformError, Result};
use crate::types::{Challenge, ChallengeStatus, Team, Tournament};

/// Add `user_id` to a tournament's participants.
///
/// Duplicate registration is reported before capacity.
pub fn register_participant(tournament: &mut Tournament, user_id: &str) -> Result<()> {
    if tournament.participants.iter().any(|p| p == user_id) {
        return Err(PlatformError::AlreadyRegistered);
    }

    if tournament.current_participants >= tournament.max_participants {
        return Err(PlatformError::Full("Tournament"));
    }

    tournament.participants.push(user_id.to_string());
    tournament.current_participants += 1;
    Ok(())
}

/// Add `user_id` to a team's members
pub fn admit_member(team: &mut Team, user_id: &str) -> Result<()> {
    if team.members.iter().any(|m| m == user_id) {
        return Err(PlatformError::AlreadyMember);
    }

    if team.members.len() >= team.max_members as usize {
        return Err(PlatformError::Full("Team"));
    }

    team.members.push(user_id.to_string());
    Ok(())
}

/// Move an open challenge to accepted, recording who accepted it
pub fn accept_challenge(challenge: &mut Challenge, user_id: &str) -> Result<()> {
    if challenge.status != ChallengeStatus::Open {
        return Err(PlatformError::InvalidState(
            "Challenge is not open".to_string(),
        ));
    }

    challenge.challenged_user = Some(user_id.to_string());
    challenge.status = ChallengeStatus::Accepted;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Stats, TournamentStatus};
    use chrono::Utc;

    fn tournament(max: u32) -> Tournament {
        let now = Utc::now();
        Tournament {
            id: "t1".to_string(),
            name: "Summer Slam".to_string(),
            description: None,
            start_date: now,
            end_date: now,
            entry_fee: 10.0,
            max_participants: max,
            current_participants: 0,
            prize_pool: 500.0,
            rules: vec![],
            status: TournamentStatus::Upcoming,
            bracket: None,
            participants: vec![],
            created_by: "organizer".to_string(),
            created_at: now,
        }
    }

    fn team(max: u32) -> Team {
        Team {
            id: "team1".to_string(),
            name: "Ballers".to_string(),
            description: None,
            captain_id: "captain".to_string(),
            members: vec!["captain".to_string()],
            max_members: max,
            team_logo: None,
            stats: Stats::new(),
            achievements: vec![],
            referral_code: "ABC123".to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn challenge(status: ChallengeStatus) -> Challenge {
        Challenge {
            id: "c1".to_string(),
            title: "1v1 at noon".to_string(),
            description: None,
            created_by: "challenger".to_string(),
            challenged_user: None,
            court_id: None,
            scheduled_date: None,
            wager_amount: None,
            status,
            winner: None,
            score: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_register_participant_until_full() {
        let mut t = tournament(2);
        register_participant(&mut t, "a").unwrap();
        register_participant(&mut t, "b").unwrap();

        let result = register_participant(&mut t, "c");
        assert!(matches!(result, Err(PlatformError::Full("Tournament"))));
        assert_eq!(t.current_participants, 2);
        assert_eq!(t.participants, vec!["a", "b"]);
    }

    #[test]
    fn test_register_participant_rejects_duplicate_before_capacity() {
        let mut t = tournament(1);
        register_participant(&mut t, "a").unwrap();

        let result = register_participant(&mut t, "a");
        assert!(matches!(result, Err(PlatformError::AlreadyRegistered)));
        assert_eq!(t.current_participants, 1);
    }

    #[test]
    fn test_admit_member() {
        let mut t = team(2);
        admit_member(&mut t, "guard").unwrap();
        assert_eq!(t.members, vec!["captain", "guard"]);

        assert!(matches!(
            admit_member(&mut t, "guard"),
            Err(PlatformError::AlreadyMember)
        ));
        assert!(matches!(
            admit_member(&mut t, "center"),
            Err(PlatformError::Full("Team"))
        ));
        assert_eq!(t.members.len(), 2);
    }

    #[test]
    fn test_captain_cannot_rejoin() {
        let mut t = team(5);
        assert!(matches!(
            admit_member(&mut t, "captain"),
            Err(PlatformError::AlreadyMember)
        ));
    }

    #[test]
    fn test_accept_open_challenge() {
        let mut c = challenge(ChallengeStatus::Open);
        accept_challenge(&mut c, "rival").unwrap();
        assert_eq!(c.status, ChallengeStatus::Accepted);
        assert_eq!(c.challenged_user.as_deref(), Some("rival"));

        let second = accept_challenge(&mut c, "someone-else");
        assert!(matches!(second, Err(PlatformError::InvalidState(_))));
        assert_eq!(c.challenged_user.as_deref(), Some("rival"));
    }

    #[test]
    fn test_accept_rejects_non_open_statuses() {
        for status in [
            ChallengeStatus::Accepted,
            ChallengeStatus::InProgress,
            ChallengeStatus::Completed,
            ChallengeStatus::Cancelled,
        ] {
            let mut c = challenge(status);
            assert!(matches!(
                accept_challenge(&mut c, "rival"),
                Err(PlatformError::InvalidState(_))
            ));
            assert_eq!(c.status, status);
        }
    }
}
