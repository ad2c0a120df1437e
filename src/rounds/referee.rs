//! Referee pool: rotation of eliminated participants back in as referees.
//!
//! Two ordered collections with well-defined reuse order:
//!
//! - `current` — this round's referees, consumed front-to-back as tables are
//!   created. Seeded with the previous round's losers (or, in round 1, with
//!   players trimmed off the shuffled active set), then topped up from the
//!   reserve.
//! - `reserve` — former referees not needed this round, kept as a stack.
//!   Top-up pops last-in-first-out: the most recently retired referee is
//!   drawn back first.
//!
//! A participant is never simultaneously in the active set and in the pool
//! for the same round; the controller moves ids between the two, it never
//! copies them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

use crate::core::ParticipantId;

/// Referees available to the current round plus the carried-over reserve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereePool {
    /// This round's referees, drawn from the front.
    current: VecDeque<ParticipantId>,
    /// Referees already attached to a table this round.
    serving: Vec<ParticipantId>,
    /// Former referees awaiting reuse, popped LIFO.
    reserve: Vec<ParticipantId>,
}

impl RefereePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enlist `id` at the back of this round's referee queue.
    pub fn enlist(&mut self, id: ParticipantId) {
        self.current.push_back(id);
    }

    /// Enlist every id in order.
    pub fn enlist_all(&mut self, ids: impl IntoIterator<Item = ParticipantId>) {
        for id in ids {
            self.enlist(id);
        }
    }

    /// Top up the current queue from the reserve until it holds `target`
    /// referees or the reserve runs dry. Reserve pops are LIFO.
    pub fn top_up(&mut self, target: usize) {
        while self.current.len() < target {
            let Some(id) = self.reserve.pop() else { break };
            debug!(referee = %id, "topping up referees from reserve");
            self.current.push_back(id);
        }
    }

    /// Draw the next referee for a table, if any remain this round.
    pub fn draw(&mut self) -> Option<ParticipantId> {
        let id = self.current.pop_front()?;
        self.serving.push(id);
        Some(id)
    }

    /// Retire the whole round's referee cohort into the reserve.
    ///
    /// Both referees who served at a table and those left undrawn go back,
    /// serving first, so none of them is lost to future top-ups.
    pub fn retire_round(&mut self) {
        self.reserve.append(&mut self.serving);
        self.reserve.extend(self.current.drain(..));
    }

    /// Referees still drawable this round.
    #[must_use]
    pub fn available(&self) -> usize {
        self.current.len()
    }

    /// Referees held in reserve for future rounds.
    #[must_use]
    pub fn reserved(&self) -> usize {
        self.reserve.len()
    }

    /// Is `id` anywhere in the pool (current, serving, or reserve)?
    #[must_use]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.current.contains(&id) || self.serving.contains(&id) || self.reserve.contains(&id)
    }

    /// Drop every pooled id, for a tournament reset.
    pub(crate) fn clear(&mut self) {
        self.current.clear();
        self.serving.clear();
        self.reserve.clear();
    }
}
