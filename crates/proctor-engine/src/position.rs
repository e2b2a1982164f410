//! Arithmetic placement-index to seat-coordinate mapping.

use proctor_core::{Arrangement, SeatPosition};

/// Map a zero-based placement index back to `(row, column)` for a
/// plain fill of the given shape.
///
/// This is the simplified inverse of the grid builder's walk and is
/// valid **only** when the grid was built with `skip_rows == 0` and no
/// double columns. With either in play the builder's walk diverges
/// from this arithmetic, and the grid itself (via
/// `SeatGrid::placements` or `RoomAllocation::placements`) is the
/// single source of truth for coordinates. The intent of combining an
/// index-based lookup with skips and double columns in the upstream
/// design was never pinned down, so this function deliberately keeps
/// the plain formula rather than guessing.
pub fn position_for_index(
    index: usize,
    rows: u32,
    columns: u32,
    arrangement: Arrangement,
) -> SeatPosition {
    let index = index as u64;
    match arrangement {
        Arrangement::RowMajor => SeatPosition {
            row: (index / u64::from(columns)) as u32,
            column: (index % u64::from(columns)) as u32,
        },
        Arrangement::ColumnMajor => SeatPosition {
            row: (index % u64::from(rows)) as u32,
            column: (index / u64::from(rows)) as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use proctor_core::SeatingRules;
    use proctor_test_utils::{room, roster};

    #[test]
    fn row_major_walks_columns_within_a_row() {
        let p = |i| position_for_index(i, 4, 3, Arrangement::RowMajor);
        assert_eq!(p(0), SeatPosition { row: 0, column: 0 });
        assert_eq!(p(2), SeatPosition { row: 0, column: 2 });
        assert_eq!(p(3), SeatPosition { row: 1, column: 0 });
        assert_eq!(p(11), SeatPosition { row: 3, column: 2 });
    }

    #[test]
    fn column_major_walks_rows_within_a_column() {
        let p = |i| position_for_index(i, 4, 3, Arrangement::ColumnMajor);
        assert_eq!(p(0), SeatPosition { row: 0, column: 0 });
        assert_eq!(p(3), SeatPosition { row: 3, column: 0 });
        assert_eq!(p(4), SeatPosition { row: 0, column: 1 });
        assert_eq!(p(11), SeatPosition { row: 3, column: 2 });
    }

    #[test]
    fn agrees_with_grid_placements_for_plain_fills() {
        for arrangement in [Arrangement::RowMajor, Arrangement::ColumnMajor] {
            let rules = SeatingRules {
                arrangement,
                ..SeatingRules::default()
            };
            let students = roster(&["CSE"], 10);
            let geometry = room(4, 3);
            let (grid, _) = build_grid(&students, &geometry, &rules).unwrap();

            for (i, (position, _)) in grid.placements(arrangement).iter().enumerate() {
                assert_eq!(
                    *position,
                    position_for_index(i, geometry.rows, geometry.columns, arrangement),
                    "index {i} under {arrangement:?}"
                );
            }
        }
    }

    #[test]
    fn diverges_from_the_grid_once_rows_are_skipped() {
        // Documented limitation: with skip_rows the formula is wrong
        // and the grid walk wins.
        let rules = SeatingRules {
            arrangement: Arrangement::RowMajor,
            skip_rows: 1,
            ..SeatingRules::default()
        };
        let students = roster(&["CSE"], 4);
        let geometry = room(4, 2);
        let (grid, _) = build_grid(&students, &geometry, &rules).unwrap();

        let placements = grid.placements(Arrangement::RowMajor);
        // Third student (index 2) really sits in row 2; the formula says row 1.
        assert_eq!(placements[2].0, SeatPosition { row: 2, column: 0 });
        assert_eq!(
            position_for_index(2, geometry.rows, geometry.columns, Arrangement::RowMajor),
            SeatPosition { row: 1, column: 0 },
        );
    }
}
