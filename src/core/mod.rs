//! Core types: participants, the roster, errors, RNG.
//!
//! This module holds the building blocks shared by every other part of the
//! crate. Nothing in here knows about rounds or tables.

pub mod error;
pub mod participant;
pub mod rng;
pub mod roster;

pub use error::{InputError, StateError};
pub use participant::{Participant, ParticipantId, Standing};
pub use rng::ShuffleRng;
pub use roster::Roster;
