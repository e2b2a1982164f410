//! Seat grids: the 2-D output of the grid builder.

use crate::rules::Arrangement;
use crate::student::StudentRecord;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Zero-based grid coordinates of one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeatPosition {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= column < columns`.
    pub column: u32,
}

/// Occupancy of one physical seat.
///
/// `Double` occurs only in columns the rules list as double columns;
/// the grid builder maintains that invariant.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Seat {
    /// No student assigned.
    #[default]
    Empty,
    /// One student.
    Single(StudentRecord),
    /// Two students sharing a bench, in placement order.
    Double(StudentRecord, StudentRecord),
}

impl Seat {
    /// Whether the seat holds no students.
    pub fn is_empty(&self) -> bool {
        matches!(self, Seat::Empty)
    }

    /// Number of students in the seat (0, 1, or 2).
    pub fn occupant_count(&self) -> usize {
        match self {
            Seat::Empty => 0,
            Seat::Single(_) => 1,
            Seat::Double(_, _) => 2,
        }
    }

    /// The seated students in placement order.
    pub fn occupants(&self) -> SmallVec<[&StudentRecord; 2]> {
        match self {
            Seat::Empty => SmallVec::new(),
            Seat::Single(a) => SmallVec::from_buf_and_len([a, a], 1),
            Seat::Double(a, b) => SmallVec::from_buf([a, b]),
        }
    }
}

/// A rows x columns matrix of [`Seat`]s.
///
/// Backed by a flat row-major `Vec`; dimensions are fixed at
/// construction and never change for the grid's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatGrid {
    rows: u32,
    columns: u32,
    seats: Vec<Seat>,
}

impl SeatGrid {
    /// Create an all-empty grid of the given shape.
    pub fn new(rows: u32, columns: u32) -> Self {
        let cells = (rows as usize) * (columns as usize);
        Self {
            rows,
            columns,
            seats: vec![Seat::Empty; cells],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total cell count, `rows * columns`.
    pub fn cell_count(&self) -> usize {
        self.seats.len()
    }

    /// Borrow the seat at `(row, column)`, or `None` when out of bounds.
    pub fn seat(&self, row: u32, column: u32) -> Option<&Seat> {
        self.flat_index(row, column).map(|i| &self.seats[i])
    }

    /// Number of students placed across all seats.
    pub fn occupant_count(&self) -> usize {
        self.seats.iter().map(Seat::occupant_count).sum()
    }

    /// Walk the grid in the given fill order and yield every seated
    /// student with its coordinates, in the exact order the grid
    /// builder placed them.
    ///
    /// This is the authoritative index-to-seat mapping: unlike the
    /// arithmetic `position_for_index` shortcut in the engine crate, it
    /// stays correct when the grid was built with skipped rows or
    /// double columns, because it reads the placement rather than
    /// recomputing it.
    pub fn placements(&self, arrangement: Arrangement) -> Vec<(SeatPosition, &StudentRecord)> {
        let mut out = Vec::with_capacity(self.occupant_count());
        let mut visit = |row: u32, column: u32| {
            if let Some(seat) = self.seat(row, column) {
                for student in seat.occupants() {
                    out.push((SeatPosition { row, column }, student));
                }
            }
        };
        match arrangement {
            Arrangement::RowMajor => {
                for row in 0..self.rows {
                    for column in 0..self.columns {
                        visit(row, column);
                    }
                }
            }
            Arrangement::ColumnMajor => {
                for column in 0..self.columns {
                    for row in 0..self.rows {
                        visit(row, column);
                    }
                }
            }
        }
        out
    }

    fn flat_index(&self, row: u32, column: u32) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some((row as usize) * (self.columns as usize) + (column as usize))
        } else {
            None
        }
    }
}

impl Index<(u32, u32)> for SeatGrid {
    type Output = Seat;

    fn index(&self, (row, column): (u32, u32)) -> &Seat {
        let i = self
            .flat_index(row, column)
            .unwrap_or_else(|| panic!("seat ({row}, {column}) out of bounds"));
        &self.seats[i]
    }
}

impl IndexMut<(u32, u32)> for SeatGrid {
    fn index_mut(&mut self, (row, column): (u32, u32)) -> &mut Seat {
        let i = self
            .flat_index(row, column)
            .unwrap_or_else(|| panic!("seat ({row}, {column}) out of bounds"));
        &mut self.seats[i]
    }
}
