//! Round-depth scoring.
//!
//! Points decay with how early a participant was knocked out, measured
//! against `final_round` — the round number that would have started next had
//! the tournament continued. The lookback is fixed at three rounds: anyone
//! eliminated earlier (and, defensively, anyone who neither won nor was ever
//! eliminated, such as round-1 referees who never played) scores the flat
//! base value. Kept exactly as shipped; widening the tiers needs new
//! requirements.

use tracing::info;

use crate::core::{ParticipantId, Roster};

/// Points awarded to the tournament winner.
pub const WINNER_POINTS: u32 = 20;

/// Flat score for everyone outside the three-round lookback.
pub const BASE_POINTS: u32 = 10;

/// Points for one participant, as a pure function of their elimination
/// round, winner status, and the final round counter.
#[must_use]
pub fn points_for(elimination_round: Option<u32>, is_winner: bool, final_round: u32) -> u32 {
    if is_winner {
        return WINNER_POINTS;
    }
    match elimination_round {
        Some(round) => match final_round.saturating_sub(round) {
            1 => 18,
            2 => 16,
            3 => 14,
            _ => BASE_POINTS,
        },
        None => BASE_POINTS,
    }
}

/// Write final scores for the whole roster.
///
/// Called from the terminal state only; idempotent, since every score is a
/// pure function of data that no longer changes.
pub fn score(roster: &mut Roster, winner: Option<ParticipantId>, final_round: u32) {
    let ids: Vec<ParticipantId> = roster.ids().collect();
    for id in ids {
        let points = points_for(
            roster[id].elimination_round,
            winner == Some(id),
            final_round,
        );
        roster.set_points(id, points);
    }
    info!(final_round, participants = roster.len(), "scored tournament");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_ladder() {
        let final_round = 5;
        assert_eq!(points_for(None, true, final_round), 20);
        assert_eq!(points_for(Some(4), false, final_round), 18);
        assert_eq!(points_for(Some(3), false, final_round), 16);
        assert_eq!(points_for(Some(2), false, final_round), 14);
        assert_eq!(points_for(Some(1), false, final_round), 10);
    }

    #[test]
    fn test_early_exits_are_lumped_together() {
        // Eliminations before final_round - 3 are indistinguishable.
        assert_eq!(points_for(Some(1), false, 10), BASE_POINTS);
        assert_eq!(points_for(Some(5), false, 10), BASE_POINTS);
        assert_eq!(points_for(Some(6), false, 10), BASE_POINTS);
        assert_eq!(points_for(Some(7), false, 10), 14);
    }

    #[test]
    fn test_never_eliminated_non_winner_scores_base() {
        // Round-1 referees leave the active set without an elimination round.
        assert_eq!(points_for(None, false, 4), BASE_POINTS);
    }

    #[test]
    fn test_score_writes_whole_roster_and_is_idempotent() {
        let mut roster = Roster::new();
        let champ = roster.add("Ali", "Laila");
        let runner_up = roster.add("Foreman", "George");
        let early = roster.add("Norton", "Ken");
        roster.mark_eliminated(runner_up, 1).unwrap();
        roster.mark_eliminated(early, 1).unwrap();

        score(&mut roster, Some(champ), 2);
        assert_eq!(roster[champ].points, 20);
        assert_eq!(roster[runner_up].points, 18);
        assert_eq!(roster[early].points, 18);

        // Re-invocation with identical inputs yields identical points.
        score(&mut roster, Some(champ), 2);
        assert_eq!(roster[champ].points, 20);
        assert_eq!(roster[runner_up].points, 18);
    }
}
