//! Per-round outcome bookkeeping.
//!
//! Outcomes live apart from the immutable [`Table`]s: the tracker maps table
//! index to [`TableOutcome`] and answers the one question the controller
//! cares about, "is every table decided?". Recording the same index again
//! overwrites — the caller is allowed to change a selection any time before
//! the round is advanced.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ParticipantId, StateError};

use super::table::{Table, TableOutcome};

/// Records bout results for the current round.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutcomeTracker {
    outcomes: FxHashMap<usize, TableOutcome>,
}

impl OutcomeTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the winner of a normal bout; the loser is the other seat.
    ///
    /// # Errors
    ///
    /// - [`StateError::UnknownTable`] if `index` is not in `tables`.
    /// - [`StateError::WrongTableKind`] if the table is a special bout.
    /// - [`StateError::NotAtTable`] if `winner` is not seated there.
    pub fn record(
        &mut self,
        tables: &[Table],
        index: usize,
        winner: ParticipantId,
    ) -> Result<(), StateError> {
        let table = tables
            .get(index)
            .ok_or(StateError::UnknownTable { index })?;
        let Some(player_b) = table.player_b else {
            return Err(StateError::WrongTableKind {
                index,
                expected: "special",
            });
        };

        let loser = if winner == table.player_a {
            player_b
        } else if winner == player_b {
            table.player_a
        } else {
            return Err(StateError::NotAtTable {
                index,
                participant: winner,
            });
        };

        self.outcomes.insert(index, TableOutcome::decided(winner, loser));
        Ok(())
    }

    /// Record the yes/no judgment of a special bout.
    ///
    /// `challenger_wins` is supplied by the surrounding system (did the lone
    /// player beat the referee?). The referee never receives a result.
    ///
    /// # Errors
    ///
    /// - [`StateError::UnknownTable`] if `index` is not in `tables`.
    /// - [`StateError::WrongTableKind`] if the table is a normal bout.
    pub fn record_special(
        &mut self,
        tables: &[Table],
        index: usize,
        challenger_wins: bool,
    ) -> Result<(), StateError> {
        let table = tables
            .get(index)
            .ok_or(StateError::UnknownTable { index })?;
        if !table.is_special() {
            return Err(StateError::WrongTableKind {
                index,
                expected: "normal",
            });
        }

        let outcome = if challenger_wins {
            TableOutcome::challenger_won(table.player_a)
        } else {
            TableOutcome::challenger_lost(table.player_a)
        };
        self.outcomes.insert(index, outcome);
        Ok(())
    }

    /// The recorded outcome for a table, if any.
    #[must_use]
    pub fn outcome(&self, index: usize) -> Option<&TableOutcome> {
        self.outcomes.get(&index)
    }

    /// Number of tables decided so far.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.outcomes.len()
    }

    /// True iff every table in the round has a recorded outcome.
    #[must_use]
    pub fn is_round_complete(&self, tables: &[Table]) -> bool {
        tables.iter().all(|t| self.outcomes.contains_key(&t.index))
    }

    /// Forget everything, ready for the next round.
    pub fn clear(&mut self) {
        self.outcomes.clear();
    }
}
