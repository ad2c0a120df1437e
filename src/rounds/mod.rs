//! Round machinery: tables, referee rotation, scheduling, outcomes.

pub mod outcome;
pub mod referee;
pub mod scheduler;
pub mod table;

pub use outcome::OutcomeTracker;
pub use referee::RefereePool;
pub use scheduler::{generate_round, FIRST_ROUND};
pub use table::{Table, TableOutcome};
