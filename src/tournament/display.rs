//! Grid layout configuration for table presentation.
//!
//! Front ends lay tables out in a grid, `tables_per_row` wide. The value is
//! the only piece of display state the core validates: it must be a positive
//! integer, and a rejected update leaves the previous value in place.

use serde::{Deserialize, Serialize};

use crate::core::InputError;

/// Tables laid out per grid row unless configured otherwise.
pub const DEFAULT_TABLES_PER_ROW: usize = 5;

/// Validated grid layout settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    tables_per_row: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tables_per_row: DEFAULT_TABLES_PER_ROW,
        }
    }
}

impl DisplayConfig {
    /// Create with the default width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current grid width.
    #[must_use]
    pub fn tables_per_row(&self) -> usize {
        self.tables_per_row
    }

    /// Set the grid width; zero is rejected and the old value kept.
    pub fn set_tables_per_row(&mut self, value: usize) -> Result<(), InputError> {
        if value == 0 {
            return Err(InputError::InvalidTablesPerRow {
                input: value.to_string(),
            });
        }
        self.tables_per_row = value;
        Ok(())
    }

    /// Parse and apply a user-supplied grid width.
    ///
    /// Anything that is not a positive integer is an [`InputError`] and the
    /// previous value is retained.
    pub fn parse_tables_per_row(&mut self, input: &str) -> Result<(), InputError> {
        let value: usize = input.trim().parse().map_err(|_| {
            InputError::InvalidTablesPerRow {
                input: input.to_string(),
            }
        })?;
        self.set_tables_per_row(value)
    }

    /// Grid cell `(row, column)` for a table index.
    #[must_use]
    pub fn grid_position(&self, table_index: usize) -> (usize, usize) {
        (
            table_index / self.tables_per_row,
            table_index % self.tables_per_row,
        )
    }

    /// Rows needed to show `table_count` tables.
    #[must_use]
    pub fn rows_for(&self, table_count: usize) -> usize {
        table_count.div_ceil(self.tables_per_row)
    }
}
