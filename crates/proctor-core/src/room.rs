//! Room geometry and traceability labels.

use crate::error::GeometryError;
use std::fmt;

/// Opaque identifiers locating a room within a campus.
///
/// The engine carries these through to the matching
/// [`RoomAllocation`](crate::seat::SeatGrid) unchanged so downstream
/// consumers (hall tickets, notice boards) can name the room. All
/// fields are optional; an unlabeled room is valid input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomLabel {
    /// Building name or code.
    pub building: Option<String>,
    /// Floor name within the building.
    pub floor: Option<String>,
    /// Room number within the floor.
    pub number: Option<String>,
}

impl fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        for part in [&self.building, &self.floor, &self.number]
            .into_iter()
            .flatten()
        {
            if wrote {
                write!(f, "/")?;
            }
            write!(f, "{part}")?;
            wrote = true;
        }
        if !wrote {
            write!(f, "<unlabeled>")?;
        }
        Ok(())
    }
}

/// Physical shape and declared capacity of one examination room.
///
/// `capacity` is authoritative for multi-room splitting while
/// `rows * columns` governs grid shape. The two may disagree (a room
/// whose advertised capacity already accounts for skipped rows, say)
/// and both are honored independently; a mismatch is valid input, not
/// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGeometry {
    /// Traceability label, carried through unchanged.
    pub label: RoomLabel,
    /// Number of seat rows.
    pub rows: u32,
    /// Number of seat columns.
    pub columns: u32,
    /// Declared student capacity used when splitting a roster across rooms.
    pub capacity: u32,
}

impl RoomGeometry {
    /// Check the structural invariants: every dimension must be non-zero.
    ///
    /// Called by the allocation entry point before any room is filled,
    /// so a bad room aborts the whole call with no partial output.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (dimension, value) in [
            ("rows", self.rows),
            ("columns", self.columns),
            ("capacity", self.capacity),
        ] {
            if value == 0 {
                return Err(GeometryError::ZeroDimension {
                    room: self.label.to_string(),
                    dimension,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(rows: u32, columns: u32, capacity: u32) -> RoomGeometry {
        RoomGeometry {
            label: RoomLabel {
                building: Some("Main".into()),
                floor: Some("1".into()),
                number: Some("101".into()),
            },
            rows,
            columns,
            capacity,
        }
    }

    #[test]
    fn validate_accepts_positive_dimensions() {
        assert!(geometry(4, 5, 20).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_rows() {
        let err = geometry(0, 5, 20).validate().unwrap_err();
        assert!(matches!(
            err,
            GeometryError::ZeroDimension {
                dimension: "rows",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_zero_capacity() {
        let err = geometry(4, 5, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            GeometryError::ZeroDimension {
                dimension: "capacity",
                ..
            }
        ));
    }

    #[test]
    fn capacity_row_column_mismatch_is_valid() {
        // Advertised capacity smaller than rows*columns is legitimate.
        assert!(geometry(4, 5, 10).validate().is_ok());
    }

    #[test]
    fn label_display_joins_present_parts() {
        let label = RoomLabel {
            building: Some("Main".into()),
            floor: None,
            number: Some("101".into()),
        };
        assert_eq!(label.to_string(), "Main/101");
        assert_eq!(RoomLabel::default().to_string(), "<unlabeled>");
    }
}
