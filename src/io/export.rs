//! Final ranking export.
//!
//! Semicolon-delimited, header `Surname;GivenName;Points`, one row per
//! participant sorted ascending by surname — including participants who
//! never played a table. Meaningful after the terminal state; exporting
//! earlier is permitted and simply writes zeros.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::{InputError, Roster};

/// Header row of the ranking file.
pub const RANKING_HEADER: &str = "Surname;GivenName;Points";

/// Write the ranking to any writer.
///
/// # Errors
///
/// [`InputError::Io`] on write failures.
pub fn write_ranking<W: Write>(mut writer: W, roster: &Roster) -> Result<(), InputError> {
    writeln!(writer, "{RANKING_HEADER}")?;
    for participant in roster.sorted_by_surname() {
        writeln!(
            writer,
            "{};{};{}",
            participant.surname, participant.given_name, participant.points
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the ranking to a file on disk.
pub fn write_ranking_file(path: impl AsRef<Path>, roster: &Roster) -> Result<(), InputError> {
    let file = File::create(&path)?;
    write_ranking(BufWriter::new(file), roster)?;
    info!(
        participants = roster.len(),
        path = %path.as_ref().display(),
        "ranking exported"
    );
    Ok(())
}
