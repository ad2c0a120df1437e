//! File glue: roster import and ranking export.
//!
//! Thin by design. The tournament core never touches the filesystem; these
//! helpers produce a [`Roster`](crate::core::Roster) from a tab-delimited
//! file and write the final ranking out again, and any front end may swap in
//! its own versions.

pub mod export;
pub mod import;

pub use export::{write_ranking, write_ranking_file, RANKING_HEADER};
pub use import::{read_roster, read_roster_file, ImportColumns};
