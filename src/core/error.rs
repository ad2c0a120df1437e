//! Error taxonomy.
//!
//! Two distinct classes, never mixed in one type:
//!
//! - [`InputError`] — bad external input (import files, configuration
//!   values). Core state is left untouched; the caller may retry with
//!   corrected input.
//! - [`StateError`] — a precondition violation by the caller (generating a
//!   round with nobody active, recording an outcome for a table that does not
//!   exist, advancing an incomplete round). These indicate misuse, not bad
//!   data, and are never silently tolerated.

use thiserror::Error;

use super::participant::ParticipantId;

/// Recoverable error in external input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying file or stream failure during import/export.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The import header row is missing a required column.
    #[error("import header is missing required column {column:?}")]
    MissingColumn {
        /// Configured name of the absent column.
        column: String,
    },

    /// The import file has no header row at all.
    #[error("import file is empty, expected a header row")]
    EmptyFile,

    /// A display-configuration value that is not a positive integer.
    #[error("invalid tables-per-row value {input:?}, expected a positive integer")]
    InvalidTablesPerRow {
        /// The rejected raw input.
        input: String,
    },
}

/// Precondition violation: the caller broke the tournament protocol.
#[derive(Debug, Error)]
pub enum StateError {
    /// A round was requested for an empty active set.
    #[error("cannot generate a round with no active participants")]
    EmptyActiveSet,

    /// An outcome was recorded for a table index that does not exist.
    #[error("no table with index {index} in the current round")]
    UnknownTable {
        /// The offending table index.
        index: usize,
    },

    /// A winner was named who is not seated at the given table.
    #[error("{participant} is not a player at table {index}")]
    NotAtTable {
        /// The table index.
        index: usize,
        /// The foreign participant.
        participant: ParticipantId,
    },

    /// A normal outcome was recorded for a special table, or vice versa.
    #[error("table {index} requires the {expected} recording method")]
    WrongTableKind {
        /// The table index.
        index: usize,
        /// "normal" or "special".
        expected: &'static str,
    },

    /// Advancement was requested before every table had an outcome.
    #[error("round {round} is incomplete: {recorded} of {expected} outcomes recorded")]
    RoundIncomplete {
        /// The round being advanced.
        round: u32,
        /// Outcomes recorded so far.
        recorded: usize,
        /// Tables in the round.
        expected: usize,
    },

    /// A mutating operation was attempted after termination.
    #[error("tournament is terminal, no further rounds or outcomes are accepted")]
    Terminal,

    /// An elimination round was about to be overwritten.
    #[error("{participant} was already eliminated in round {existing}")]
    AlreadyEliminated {
        /// The participant in question.
        participant: ParticipantId,
        /// The round already on record.
        existing: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::MissingColumn {
            column: "Surname".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "import header is missing required column \"Surname\""
        );
    }

    #[test]
    fn test_state_error_display() {
        let err = StateError::RoundIncomplete {
            round: 2,
            recorded: 1,
            expected: 3,
        };
        assert_eq!(
            err.to_string(),
            "round 2 is incomplete: 1 of 3 outcomes recorded"
        );

        let err = StateError::NotAtTable {
            index: 0,
            participant: ParticipantId::new(7),
        };
        assert_eq!(err.to_string(), "Participant 7 is not a player at table 0");
    }
}
