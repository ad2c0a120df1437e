//! Tournament controller: the round-to-round state machine.
//!
//! The controller is the sole owner of all mutable tournament state — the
//! roster, the active set, the referee pool, the round counter — and the only
//! component that moves participants between the three standings.
//!
//! ## Phases
//!
//! ```text
//! AwaitingOutcomes(n) ──all tables decided──▶ RoundComplete(n)
//! RoundComplete(n) ──advance, >1 winner──▶ AwaitingOutcomes(n + 1)
//! RoundComplete(n) ──advance, 1 winner──▶ Terminal
//! ```
//!
//! `RoundComplete` enables advancement but never forces it; outcomes may
//! still be re-recorded until [`Tournament::advance_round`] is called.
//! `Terminal` is absorbing: after it, only scoring data is readable and no
//! further mutation of eliminations or standings occurs.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ParticipantId, Roster, ShuffleRng, Standing, StateError};
use crate::rounds::{generate_round, OutcomeTracker, RefereePool, Table, FIRST_ROUND};

use super::scoring;

/// Where the state machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Tables are seated and at least one outcome is missing.
    AwaitingOutcomes {
        /// The round in play.
        round: u32,
    },
    /// Every table is decided; advancement is enabled.
    RoundComplete {
        /// The round in play.
        round: u32,
    },
    /// One participant remains; scores are final.
    Terminal,
}

/// A running single-elimination tournament.
#[derive(Debug)]
pub struct Tournament {
    roster: Roster,
    active: Vec<ParticipantId>,
    pool: RefereePool,
    tracker: OutcomeTracker,
    tables: Vec<Table>,
    round: u32,
    winner: Option<ParticipantId>,
    terminal: bool,
    rng: ShuffleRng,
}

impl Tournament {
    /// Start a tournament over `roster` with an injected random source.
    ///
    /// Generates round 1 immediately. A single-participant roster goes
    /// straight to [`Phase::Terminal`] with that participant as winner.
    ///
    /// # Errors
    ///
    /// [`StateError::EmptyActiveSet`] for an empty roster.
    pub fn new(roster: Roster, rng: ShuffleRng) -> Result<Self, StateError> {
        let mut tournament = Self {
            roster,
            active: Vec::new(),
            pool: RefereePool::new(),
            tracker: OutcomeTracker::new(),
            tables: Vec::new(),
            round: FIRST_ROUND,
            winner: None,
            terminal: false,
            rng,
        };
        tournament.start()?;
        Ok(tournament)
    }

    /// Start a tournament with entropy-seeded randomness.
    pub fn from_entropy(roster: Roster) -> Result<Self, StateError> {
        Self::new(roster, ShuffleRng::from_entropy())
    }

    fn start(&mut self) -> Result<(), StateError> {
        self.active = self.roster.ids().collect();
        if self.active.is_empty() {
            return Err(StateError::EmptyActiveSet);
        }
        if self.active.len() == 1 {
            self.finish(self.active[0]);
            return Ok(());
        }
        self.tables = generate_round(&self.active, self.round, &mut self.pool, &mut self.rng)?;
        Ok(())
    }

    fn finish(&mut self, winner: ParticipantId) {
        self.winner = Some(winner);
        self.terminal = true;
        self.active = vec![winner];
        self.tables.clear();
        self.tracker.clear();
        scoring::score(&mut self.roster, self.winner, self.round);
        info!(winner = %winner, final_round = self.round, "tournament terminal");
    }

    // === Observation ===

    /// The participant store, including scores once terminal.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Tables of the round in play. Empty once terminal.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Participants still in contention.
    #[must_use]
    pub fn active(&self) -> &[ParticipantId] {
        &self.active
    }

    /// The current round counter. After termination this is the round that
    /// would have started next — the `final_round` scoring was run with.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The declared winner, once terminal.
    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        self.winner
    }

    /// Has the tournament reached its absorbing state?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True iff every table of the current round has an outcome.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.tracker.is_round_complete(&self.tables)
    }

    /// Current phase, derived from recorded state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.terminal {
            Phase::Terminal
        } else if self.is_round_complete() {
            Phase::RoundComplete { round: self.round }
        } else {
            Phase::AwaitingOutcomes { round: self.round }
        }
    }

    /// A participant's standing right now.
    #[must_use]
    pub fn standing(&self, id: ParticipantId) -> Standing {
        if self.winner == Some(id) {
            Standing::Winner
        } else if let Some(round) = self.roster[id].elimination_round {
            Standing::Eliminated(round)
        } else {
            Standing::Active
        }
    }

    // === Outcome recording ===

    /// Record the winner of a normal table. Overwrites any earlier selection
    /// for the same table.
    pub fn record_result(
        &mut self,
        table_index: usize,
        winner: ParticipantId,
    ) -> Result<(), StateError> {
        if self.terminal {
            return Err(StateError::Terminal);
        }
        self.tracker.record(&self.tables, table_index, winner)
    }

    /// Record the yes/no judgment of a special table: did the lone player
    /// beat the referee?
    pub fn record_special_result(
        &mut self,
        table_index: usize,
        challenger_wins: bool,
    ) -> Result<(), StateError> {
        if self.terminal {
            return Err(StateError::Terminal);
        }
        self.tracker.record_special(&self.tables, table_index, challenger_wins)
    }

    // === Transitions ===

    /// Advance to the next round, or to [`Phase::Terminal`] if exactly one
    /// participant would remain.
    ///
    /// In order: winners become the next active set; losers get their
    /// elimination round stamped and become the next round's referee
    /// candidates; this round's whole referee cohort retires to the reserve;
    /// the round counter increments; then either scoring runs (terminal) or
    /// the next round is generated.
    ///
    /// # Errors
    ///
    /// [`StateError::Terminal`] after termination,
    /// [`StateError::RoundIncomplete`] if any table is undecided.
    pub fn advance_round(&mut self) -> Result<Phase, StateError> {
        if self.terminal {
            return Err(StateError::Terminal);
        }
        if !self.tracker.is_round_complete(&self.tables) {
            return Err(StateError::RoundIncomplete {
                round: self.round,
                recorded: self.tracker.recorded(),
                expected: self.tables.len(),
            });
        }

        let mut winners = Vec::new();
        let mut losers = Vec::new();
        for table in &self.tables {
            let outcome =
                self.tracker
                    .outcome(table.index)
                    .ok_or(StateError::RoundIncomplete {
                        round: self.round,
                        recorded: self.tracker.recorded(),
                        expected: self.tables.len(),
                    })?;
            if let Some(winner) = outcome.winner {
                winners.push(winner);
            }
            if let Some(loser) = outcome.loser {
                losers.push(loser);
            }
        }

        for &loser in &losers {
            self.roster.mark_eliminated(loser, self.round)?;
        }

        // Old cohort to the reserve, this round's losers become the next
        // round's referee queue.
        self.pool.retire_round();
        self.pool.enlist_all(losers.iter().copied());

        info!(
            round = self.round,
            winners = winners.len(),
            eliminated = losers.len(),
            "round advanced"
        );

        self.round += 1;
        self.tracker.clear();
        self.active = winners;

        match self.active.as_slice() {
            [] => Err(StateError::EmptyActiveSet),
            [sole_survivor] => {
                let survivor = *sole_survivor;
                self.finish(survivor);
                Ok(Phase::Terminal)
            }
            _ => {
                self.tables =
                    generate_round(&self.active, self.round, &mut self.pool, &mut self.rng)?;
                Ok(Phase::AwaitingOutcomes { round: self.round })
            }
        }
    }

    /// Restart from round 1 with the same roster.
    ///
    /// Scores and elimination rounds are wiped and the referee pool emptied,
    /// so the set-once rules hold within the new run.
    pub fn reset(&mut self) -> Result<(), StateError> {
        self.roster.clear_results();
        self.pool.clear();
        self.tracker.clear();
        self.tables.clear();
        self.round = FIRST_ROUND;
        self.winner = None;
        self.terminal = false;
        info!("tournament reset");
        self.start()
    }
}
