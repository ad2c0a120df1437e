//! Roster import from tab-delimited files.
//!
//! The expected shape is an export from a school information system: a
//! header row naming the columns, then one row per person. Only the surname
//! and given-name columns matter; their header names are configurable via
//! [`ImportColumns`]. Rows missing either value are skipped without failing
//! the import. A missing required column or an I/O failure aborts the whole
//! import and yields no roster, never a partial one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::core::{InputError, Roster};

/// Header names of the two required columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportColumns {
    /// Header cell naming the surname column.
    pub surname: String,
    /// Header cell naming the given-name column.
    pub given_name: String,
}

impl Default for ImportColumns {
    fn default() -> Self {
        Self {
            surname: "Surname".to_string(),
            given_name: "GivenName".to_string(),
        }
    }
}

impl ImportColumns {
    /// Use custom header names for the two columns.
    pub fn new(surname: impl Into<String>, given_name: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            given_name: given_name.into(),
        }
    }
}

/// Read a roster from tab-delimited text.
///
/// # Errors
///
/// [`InputError::EmptyFile`] without a header row,
/// [`InputError::MissingColumn`] if a required column is absent, and
/// [`InputError::Io`] on stream failures.
pub fn read_roster<R: BufRead>(reader: R, columns: &ImportColumns) -> Result<Roster, InputError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(InputError::EmptyFile),
    };
    // Spreadsheet exports often carry a UTF-8 BOM on the first cell.
    let header = header.trim_start_matches('\u{feff}');

    let cells: Vec<&str> = header.split('\t').map(str::trim).collect();
    let surname_col = find_column(&cells, &columns.surname)?;
    let given_col = find_column(&cells, &columns.given_name)?;

    let mut roster = Roster::new();
    let mut skipped = 0usize;
    for line in lines {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        let surname = fields.get(surname_col).map_or("", |f| f.trim());
        let given_name = fields.get(given_col).map_or("", |f| f.trim());

        if surname.is_empty() || given_name.is_empty() {
            skipped += 1;
            continue;
        }
        roster.add(surname, given_name);
    }

    if skipped > 0 {
        debug!(skipped, "skipped rows with missing name fields");
    }
    info!(imported = roster.len(), "roster imported");
    Ok(roster)
}

/// Read a roster from a file on disk.
pub fn read_roster_file(
    path: impl AsRef<Path>,
    columns: &ImportColumns,
) -> Result<Roster, InputError> {
    let file = File::open(path)?;
    read_roster(BufReader::new(file), columns)
}

fn find_column(cells: &[&str], name: &str) -> Result<usize, InputError> {
    cells
        .iter()
        .position(|cell| *cell == name)
        .ok_or_else(|| InputError::MissingColumn {
            column: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(text: &str) -> Result<Roster, InputError> {
        read_roster(text.as_bytes(), &ImportColumns::default())
    }

    #[test]
    fn test_basic_import() {
        let roster = import("Surname\tGivenName\nHopper\tGrace\nHamilton\tMargaret\n").unwrap();
        assert_eq!(roster.len(), 2);
        let (_, first) = roster.iter().next().unwrap();
        assert_eq!(first.surname, "Hopper");
        assert_eq!(first.given_name, "Grace");
        assert_eq!(first.points, 0);
        assert_eq!(first.elimination_round, None);
    }

    #[test]
    fn test_extra_columns_and_any_order() {
        let text = "Class\tGivenName\tSurname\n3B\tKatherine\tJohnson\n";
        let roster = import(text).unwrap();
        assert_eq!(roster.len(), 1);
        let (_, p) = roster.iter().next().unwrap();
        assert_eq!(p.surname, "Johnson");
        assert_eq!(p.given_name, "Katherine");
    }

    #[test]
    fn test_rows_missing_a_name_are_skipped() {
        let text = "Surname\tGivenName\nHopper\tGrace\nNoGiven\t\n\tNoSurname\nHamilton\tMargaret\n";
        let roster = import(text).unwrap();
        assert_eq!(roster.len(), 2);
        let surnames: Vec<_> = roster.iter().map(|(_, p)| p.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Hopper", "Hamilton"]);
    }

    #[test]
    fn test_missing_column_is_an_input_error() {
        let err = import("Surname\tClass\nHopper\t3B\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingColumn { column } if column == "GivenName"
        ));
    }

    #[test]
    fn test_empty_file() {
        let err = import("").unwrap_err();
        assert!(matches!(err, InputError::EmptyFile));
    }

    #[test]
    fn test_header_only_yields_empty_roster() {
        let roster = import("Surname\tGivenName\n").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_bom_and_custom_columns() {
        let text = "\u{feff}Nom\tPr\u{e9}nom\nCurie\tMarie\n";
        let columns = ImportColumns::new("Nom", "Pr\u{e9}nom");
        let roster = read_roster(text.as_bytes(), &columns).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_file_not_found_is_io_error() {
        let err =
            read_roster_file("/nonexistent/roster.tsv", &ImportColumns::default()).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
