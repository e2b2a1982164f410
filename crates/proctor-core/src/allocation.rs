//! Per-room and whole-call allocation results.

use crate::room::RoomGeometry;
use crate::rules::Arrangement;
use crate::seat::{SeatGrid, SeatPosition};
use crate::student::StudentRecord;

/// One room's share of an allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomAllocation {
    /// The room, label included, exactly as supplied by the caller.
    pub geometry: RoomGeometry,
    /// Fill order the grid was built with.
    pub arrangement: Arrangement,
    /// The populated seat grid.
    pub grid: SeatGrid,
    /// Students assigned to this room, in placement order. May exceed
    /// the grid's occupants when skipped rows leave the room with fewer
    /// effective seats than its declared capacity.
    pub students: Vec<StudentRecord>,
    /// Seated students as a percentage of declared capacity, rounded
    /// to one decimal place.
    pub utilization: f64,
}

impl RoomAllocation {
    /// Number of students actually seated in the grid.
    pub fn placed_count(&self) -> usize {
        self.grid.occupant_count()
    }

    /// Every seated student with its coordinates, in placement order.
    ///
    /// Reads the grid directly, so the coordinates are correct for any
    /// combination of skipped rows and double columns.
    pub fn placements(&self) -> Vec<(SeatPosition, &StudentRecord)> {
        self.grid.placements(self.arrangement)
    }
}

/// The outcome of one allocation call.
///
/// Rooms appear in caller-supplied order; rooms the roster never
/// reached are omitted rather than included empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllocationResult {
    /// Per-room allocations, one per room that received students.
    pub rooms: Vec<RoomAllocation>,
    /// Eligible, ordered students left over once every room was full.
    pub unallocated: Vec<StudentRecord>,
}

impl AllocationResult {
    /// Total students assigned across all rooms.
    pub fn total_assigned(&self) -> usize {
        self.rooms.iter().map(|r| r.students.len()).sum()
    }
}
