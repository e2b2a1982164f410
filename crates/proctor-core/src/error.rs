//! Validation error types, organized by failure domain.
//!
//! All variants are detected up front by the allocation entry point;
//! none can occur after the first seat is placed, so a failed call
//! never produces partial output.

use std::error::Error;
use std::fmt;

/// A room geometry that cannot host an allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Rows, columns, or capacity is zero.
    ZeroDimension {
        /// Display label of the offending room.
        room: String,
        /// Which dimension was zero: `"rows"`, `"columns"`, or `"capacity"`.
        dimension: &'static str,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { room, dimension } => {
                write!(f, "room {room}: {dimension} must be non-zero")
            }
        }
    }
}

impl Error for GeometryError {}

/// Seating rules inconsistent with a room's shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesError {
    /// A `double_columns` entry does not name a real column.
    /// Entries are 1-indexed, so 0 is always rejected.
    DoubleColumnOutOfRange {
        /// The offending entry.
        column: u32,
        /// The room's column count.
        columns: u32,
    },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleColumnOutOfRange { column, columns } => {
                write!(
                    f,
                    "double column {column} out of range for a room with {columns} columns \
                     (columns are 1-indexed)"
                )
            }
        }
    }
}

impl Error for RulesError {}

/// Any validation failure reported by the allocation entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocationError {
    /// A room failed geometry validation.
    Geometry(GeometryError),
    /// The rules are inconsistent with a room's shape.
    Rules(RulesError),
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "invalid geometry: {e}"),
            Self::Rules(e) => write!(f, "invalid rules: {e}"),
        }
    }
}

impl Error for AllocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::Rules(e) => Some(e),
        }
    }
}

impl From<GeometryError> for AllocationError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<RulesError> for AllocationError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}
