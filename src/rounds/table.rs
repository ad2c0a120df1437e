//! Tables: one unit of competition within a round.
//!
//! A table seats either two players (a normal bout) or a lone player facing
//! the table's referee (a special bout, produced when the pairing walk ends
//! on an odd participant). Tables are immutable once created; outcomes are
//! recorded separately by the [`OutcomeTracker`](crate::rounds::OutcomeTracker).

use serde::{Deserialize, Serialize};

use crate::core::ParticipantId;

/// A seating assignment for one bout.
///
/// `index` identifies the table's display slot and is the key under which
/// its outcome is recorded. `referee` is `None` when the referee queue ran
/// dry; an implicit non-competing proctor is assumed at presentation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Display slot, dense from 0 within a round.
    pub index: usize,
    /// First player, always present.
    pub player_a: ParticipantId,
    /// Second player; `None` marks a special player-vs-referee bout.
    pub player_b: Option<ParticipantId>,
    /// Assigned referee, never a competitor at this table.
    pub referee: Option<ParticipantId>,
}

impl Table {
    /// Seat a normal two-player bout.
    #[must_use]
    pub fn pair(
        index: usize,
        player_a: ParticipantId,
        player_b: ParticipantId,
        referee: Option<ParticipantId>,
    ) -> Self {
        Self {
            index,
            player_a,
            player_b: Some(player_b),
            referee,
        }
    }

    /// Seat a special bout: one player against the referee (or proctor).
    #[must_use]
    pub fn special(index: usize, player: ParticipantId, referee: Option<ParticipantId>) -> Self {
        Self {
            index,
            player_a: player,
            player_b: None,
            referee,
        }
    }

    /// True for a player-vs-referee bout.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.player_b.is_none()
    }

    /// Is `id` seated at this table as a player (not as referee)?
    #[must_use]
    pub fn has_player(&self, id: ParticipantId) -> bool {
        self.player_a == id || self.player_b == Some(id)
    }

    /// The player seats in order. One entry for a special table.
    pub fn players(&self) -> impl Iterator<Item = ParticipantId> {
        std::iter::once(self.player_a).chain(self.player_b)
    }
}

/// Result of one bout, keyed by table index in the round's outcome map.
///
/// Normal bout: both sides set, drawn from the table's players. Special
/// bout: exactly one side set, the referee is untouched either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOutcome {
    /// Player advancing to the next round, if any.
    pub winner: Option<ParticipantId>,
    /// Player eliminated by this bout, if any.
    pub loser: Option<ParticipantId>,
}

impl TableOutcome {
    /// Outcome of a normal bout.
    #[must_use]
    pub fn decided(winner: ParticipantId, loser: ParticipantId) -> Self {
        Self {
            winner: Some(winner),
            loser: Some(loser),
        }
    }

    /// Special bout where the lone player beat the referee.
    #[must_use]
    pub fn challenger_won(player: ParticipantId) -> Self {
        Self {
            winner: Some(player),
            loser: None,
        }
    }

    /// Special bout where the lone player lost to the referee.
    #[must_use]
    pub fn challenger_lost(player: ParticipantId) -> Self {
        Self {
            winner: None,
            loser: Some(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> ParticipantId {
        ParticipantId::new(id)
    }

    #[test]
    fn test_pair_table() {
        let table = Table::pair(0, p(1), p(2), Some(p(3)));
        assert!(!table.is_special());
        assert!(table.has_player(p(1)));
        assert!(table.has_player(p(2)));
        // The referee is not a player.
        assert!(!table.has_player(p(3)));
        assert_eq!(table.players().collect::<Vec<_>>(), vec![p(1), p(2)]);
    }

    #[test]
    fn test_special_table() {
        let table = Table::special(4, p(9), None);
        assert!(table.is_special());
        assert_eq!(table.players().collect::<Vec<_>>(), vec![p(9)]);
        assert_eq!(table.referee, None);
    }

    #[test]
    fn test_outcome_shapes() {
        let won = TableOutcome::challenger_won(p(5));
        assert_eq!(won.winner, Some(p(5)));
        assert_eq!(won.loser, None);

        let lost = TableOutcome::challenger_lost(p(5));
        assert_eq!(lost.winner, None);
        assert_eq!(lost.loser, Some(p(5)));

        let normal = TableOutcome::decided(p(1), p(2));
        assert_eq!(normal.winner, Some(p(1)));
        assert_eq!(normal.loser, Some(p(2)));
    }
}
