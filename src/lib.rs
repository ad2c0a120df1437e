//! # knockout
//!
//! A single-elimination tournament engine: random pairing, referee rotation
//! drawn from the eliminated, round-by-round advancement, and round-depth
//! point scoring. The core is an in-process library; rendering and user
//! interaction belong to whatever front end drives it.
//!
//! ## Design Principles
//!
//! 1. **One owner of mutable state**: the [`Tournament`] controller holds
//!    the roster, active set, referee pool, and round counter. Everything
//!    else observes; nothing else mutates.
//!
//! 2. **Values at the seams**: rounds are described by immutable [`Table`]s
//!    and recorded [`TableOutcome`]s, so a rendering layer can observe state
//!    without being able to corrupt it.
//!
//! 3. **Injectable randomness**: shuffling goes through [`ShuffleRng`];
//!    tests pin a seed, production draws from entropy.
//!
//! ## Modules
//!
//! - `core`: participants, the roster, errors, RNG
//! - `rounds`: tables, referee pool, round scheduling, outcome tracking
//! - `tournament`: the controller state machine, scoring, display layout
//! - `io`: tab-delimited roster import, semicolon-delimited ranking export
//!
//! ## A complete run
//!
//! ```
//! use knockout::{Phase, Roster, ShuffleRng, Tournament};
//!
//! let mut roster = Roster::new();
//! for (surname, given) in [("Borg", "Bjorn"), ("Evert", "Chris"),
//!                          ("Graf", "Steffi"), ("Laver", "Rod")] {
//!     roster.add(surname, given);
//! }
//!
//! let mut tournament = Tournament::new(roster, ShuffleRng::new(42)).unwrap();
//! while !tournament.is_terminal() {
//!     for table in tournament.tables().to_vec() {
//!         if table.is_special() {
//!             tournament.record_special_result(table.index, true).unwrap();
//!         } else {
//!             tournament.record_result(table.index, table.player_a).unwrap();
//!         }
//!     }
//!     tournament.advance_round().unwrap();
//! }
//!
//! assert_eq!(tournament.phase(), Phase::Terminal);
//! let champion = tournament.winner().unwrap();
//! assert_eq!(tournament.roster()[champion].points, 20);
//! ```

pub mod core;
pub mod io;
pub mod rounds;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    InputError, Participant, ParticipantId, Roster, ShuffleRng, Standing, StateError,
};

pub use crate::rounds::{
    generate_round, OutcomeTracker, RefereePool, Table, TableOutcome, FIRST_ROUND,
};

pub use crate::tournament::{
    points_for, score, DisplayConfig, Phase, Tournament, BASE_POINTS, DEFAULT_TABLES_PER_ROW,
    WINNER_POINTS,
};

pub use crate::io::{read_roster, read_roster_file, write_ranking, write_ranking_file, ImportColumns};
