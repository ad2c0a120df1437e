//! Participant identity and per-tournament status.
//!
//! ## ParticipantId
//!
//! Type-safe index into the [`Roster`](crate::core::Roster). Ids are
//! allocated in import order and stay valid for the whole process lifetime:
//! participants are never destroyed, only reclassified.
//!
//! ## Standing
//!
//! Derived classification of a participant at any point in time. Every
//! participant is in exactly one standing: still active, eliminated in a
//! known round, or the final winner.

use serde::{Deserialize, Serialize};

/// Identifier for a tournament participant.
///
/// Indexes into the roster; the first imported participant is
/// `ParticipantId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// A tournament participant.
///
/// Identity (`surname`, `given_name`) is fixed at import. `points` is written
/// exactly once, by scoring at termination. `elimination_round` is `None`
/// while the participant is still active (or ends up the winner) and is set
/// at most once, by the controller, when the participant loses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Family name, non-empty.
    pub surname: String,
    /// Given name, non-empty.
    pub given_name: String,
    /// Final score; 0 until the tournament terminates.
    pub points: u32,
    /// Round in which this participant lost, if any.
    pub elimination_round: Option<u32>,
}

impl Participant {
    /// Create a participant with zero points and no elimination round.
    pub fn new(surname: impl Into<String>, given_name: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            given_name: given_name.into(),
            points: 0,
            elimination_round: None,
        }
    }

    /// "Given Surname" display form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}

/// Where a participant currently stands in the tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    /// Has not lost a table yet.
    Active,
    /// Lost in the given round.
    Eliminated(u32),
    /// Sole survivor, declared at termination.
    Winner,
}
