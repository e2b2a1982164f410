//! The grid builder: filling one room's seats from an ordered chunk.

use proctor_core::{
    Arrangement, RoomGeometry, RulesError, Seat, SeatGrid, SeatingRules, StudentRecord,
};

/// Populate a fresh grid for one room from a pre-sliced student chunk.
///
/// Returns the grid and the number of students consumed from the
/// chunk. The walk visits cells in `rules.arrangement` order; a row is
/// skipped entirely (cursor untouched) when `skip_rows > 0` and
/// `(row + 1) % (skip_rows + 1) == 0`. Cells in a double column take
/// two students while at least two remain. Running out of students
/// leaves the rest of the grid empty and is not an error; the caller
/// pre-slices the chunk to at most room capacity, so oversupply cannot
/// occur here.
pub fn build_grid(
    chunk: &[StudentRecord],
    geometry: &RoomGeometry,
    rules: &SeatingRules,
) -> Result<(SeatGrid, usize), RulesError> {
    rules.validate_for_columns(geometry.columns)?;

    let mut grid = SeatGrid::new(geometry.rows, geometry.columns);
    let mut cursor = 0usize;

    let mut fill_cell = |grid: &mut SeatGrid, row: u32, column: u32| {
        if cursor >= chunk.len() {
            return;
        }
        if rules.is_double_column(column + 1) && cursor + 1 < chunk.len() {
            grid[(row, column)] = Seat::Double(chunk[cursor].clone(), chunk[cursor + 1].clone());
            cursor += 2;
        } else {
            grid[(row, column)] = Seat::Single(chunk[cursor].clone());
            cursor += 1;
        }
    };

    match rules.arrangement {
        Arrangement::RowMajor => {
            for row in 0..geometry.rows {
                if is_skipped_row(row, rules.skip_rows) {
                    continue;
                }
                for column in 0..geometry.columns {
                    fill_cell(&mut grid, row, column);
                }
            }
        }
        Arrangement::ColumnMajor => {
            for column in 0..geometry.columns {
                for row in 0..geometry.rows {
                    if is_skipped_row(row, rules.skip_rows) {
                        continue;
                    }
                    fill_cell(&mut grid, row, column);
                }
            }
        }
    }

    Ok((grid, cursor))
}

/// Whether `row` (zero-based) is left empty under the skip cadence:
/// every `(skip_rows + 1)`-th row counting from row 1.
fn is_skipped_row(row: u32, skip_rows: u32) -> bool {
    skip_rows > 0 && (row + 1) % (skip_rows + 1) == 0
}

/// Seated students over declared capacity, as a percentage rounded to
/// one decimal place.
pub fn utilization_percent(placed: usize, capacity: u32) -> f64 {
    (placed as f64 / capacity as f64 * 1000.0).round() / 10.0
}
