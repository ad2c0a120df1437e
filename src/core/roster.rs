//! Roster: the id-allocating participant store.
//!
//! The roster is the single owner of participant records. Everything else in
//! the crate passes [`ParticipantId`]s around; only the roster writes
//! `points` and `elimination_round`, so the set-once rules are enforced in
//! one place.
//!
//! ```
//! use knockout::core::Roster;
//!
//! let mut roster = Roster::new();
//! let ada = roster.add("Lovelace", "Ada");
//! let alan = roster.add("Turing", "Alan");
//!
//! roster.mark_eliminated(alan, 1).unwrap();
//! assert_eq!(roster[alan].elimination_round, Some(1));
//! assert_eq!(roster[ada].elimination_round, None);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::StateError;
use super::participant::{Participant, ParticipantId};

/// Ordered store of every participant in the tournament.
///
/// Ids are allocated densely in insertion order. Participants are never
/// removed; eliminated players stay in the roster so they can referee later
/// rounds and appear in the final ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant, returning its id.
    pub fn add(
        &mut self,
        surname: impl Into<String>,
        given_name: impl Into<String>,
    ) -> ParticipantId {
        let id = ParticipantId::new(self.participants.len() as u32);
        self.participants.push(Participant::new(surname, given_name));
        id
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// True if nobody has been imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Get a participant by id.
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.index()]
    }

    /// Iterate over all ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> {
        (0..self.participants.len() as u32).map(ParticipantId)
    }

    /// Iterate over `(id, participant)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Participant)> {
        self.participants
            .iter()
            .enumerate()
            .map(|(i, p)| (ParticipantId(i as u32), p))
    }

    /// Record that a participant lost in `round`.
    ///
    /// The elimination round is written exactly once per tournament run;
    /// a second write is a [`StateError::AlreadyEliminated`].
    pub fn mark_eliminated(&mut self, id: ParticipantId, round: u32) -> Result<(), StateError> {
        let participant = &mut self.participants[id.index()];
        if let Some(existing) = participant.elimination_round {
            return Err(StateError::AlreadyEliminated {
                participant: id,
                existing,
            });
        }
        participant.elimination_round = Some(round);
        Ok(())
    }

    /// Write a participant's final score.
    ///
    /// Called only by scoring at termination; scoring is a pure function of
    /// the elimination data, so rewriting the same value is harmless.
    pub(crate) fn set_points(&mut self, id: ParticipantId, points: u32) {
        self.participants[id.index()].points = points;
    }

    /// Clear scores and elimination rounds for a fresh tournament run.
    pub(crate) fn clear_results(&mut self) {
        for participant in &mut self.participants {
            participant.points = 0;
            participant.elimination_round = None;
        }
    }

    /// All participants sorted ascending by surname, for ranking output.
    #[must_use]
    pub fn sorted_by_surname(&self) -> Vec<&Participant> {
        let mut sorted: Vec<&Participant> = self.participants.iter().collect();
        sorted.sort_by(|a, b| a.surname.cmp(&b.surname));
        sorted
    }
}

impl Index<ParticipantId> for Roster {
    type Output = Participant;

    fn index(&self, id: ParticipantId) -> &Self::Output {
        self.get(id)
    }
}
