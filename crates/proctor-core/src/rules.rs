//! Seating rules: fill order, anti-collusion options, and filters.

use crate::error::RulesError;

/// Fill order for a room's seat grid.
///
/// A closed enum rather than a string key so an invalid arrangement
/// cannot reach the grid builder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Arrangement {
    /// Fill row by row: all columns of row 0, then row 1, and so on.
    RowMajor,
    /// Fill column by column: all rows of column 0, then column 1, and
    /// so on. The customary layout for exam halls, hence the default.
    #[default]
    ColumnMajor,
}

/// Placement and eligibility rules for one allocation call.
///
/// The filter fields use absence to disable a predicate: a `None`
/// attendance threshold and empty status lists admit every student.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatingRules {
    /// Grid fill order.
    pub arrangement: Arrangement,
    /// When true, interleave branches (shuffled per branch) instead of
    /// sorting; see the ordering stage for the exact algorithm.
    pub branch_mixing: bool,
    /// Leave every `(skip_rows + 1)`-th row empty, counting from row 1.
    /// Zero disables row skipping.
    pub skip_rows: u32,
    /// 1-indexed columns whose seats may hold two students each.
    pub double_columns: Vec<u32>,
    /// Minimum attendance percentage; `None` disables the check.
    pub min_attendance: Option<f64>,
    /// Admissible `status` values; empty disables the check.
    pub allowed_status: Vec<String>,
    /// Admissible `fee_status` values; empty disables the check.
    pub allowed_fee_status: Vec<String>,
}

impl Default for SeatingRules {
    fn default() -> Self {
        Self {
            arrangement: Arrangement::ColumnMajor,
            branch_mixing: false,
            skip_rows: 0,
            double_columns: Vec::new(),
            min_attendance: None,
            allowed_status: Vec::new(),
            allowed_fee_status: Vec::new(),
        }
    }
}

impl SeatingRules {
    /// Check that every `double_columns` entry names a real column of a
    /// room with `columns` columns. Entries are 1-indexed, so 0 is
    /// always out of range.
    pub fn validate_for_columns(&self, columns: u32) -> Result<(), RulesError> {
        for &column in &self.double_columns {
            if column == 0 || column > columns {
                return Err(RulesError::DoubleColumnOutOfRange { column, columns });
            }
        }
        Ok(())
    }

    /// Whether the 1-indexed `column` may seat two students per cell.
    pub fn is_double_column(&self, column: u32) -> bool {
        self.double_columns.contains(&column)
    }
}
