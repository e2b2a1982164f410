//! The allocation entry point: filter, order, and split across rooms.

use crate::{filter, grid, order};
use proctor_core::{
    AllocationError, AllocationResult, RoomAllocation, RoomGeometry, SeatingRules, StudentRecord,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full pipeline over a roster and an ordered room list.
///
/// Rooms are filled strictly in input order: each receives the next
/// `min(remaining, capacity)` students of the filtered, ordered
/// sequence. Rooms reached after the sequence is exhausted are omitted
/// from the result rather than returned empty, and whatever the rooms
/// could not absorb comes back in `unallocated` — oversupply is the
/// caller's problem to resolve, never an error here.
///
/// All geometry and rules validation happens before the first seat is
/// placed, so `Err` means no partial output existed. An empty roster
/// or empty room list is valid and produces an empty result.
///
/// The `rng` drives only the branch-mix shuffle; sort mode never
/// touches it. Inputs are never mutated.
pub fn allocate<R: Rng>(
    roster: &[StudentRecord],
    rooms: &[RoomGeometry],
    rules: &SeatingRules,
    rng: &mut R,
) -> Result<AllocationResult, AllocationError> {
    for room in rooms {
        room.validate()?;
        rules.validate_for_columns(room.columns)?;
    }

    let eligible = filter::eligible(roster, rules);
    let ordered = order::arrange(eligible, rules, rng);

    let mut allocations = Vec::new();
    let mut cursor = 0usize;
    for room in rooms {
        if cursor >= ordered.len() {
            break;
        }
        let take = (room.capacity as usize).min(ordered.len() - cursor);
        let chunk = &ordered[cursor..cursor + take];
        let (seat_grid, placed) = grid::build_grid(chunk, room, rules)?;

        allocations.push(RoomAllocation {
            geometry: room.clone(),
            arrangement: rules.arrangement,
            utilization: grid::utilization_percent(placed, room.capacity),
            grid: seat_grid,
            students: chunk.to_vec(),
        });
        cursor += take;
    }

    Ok(AllocationResult {
        rooms: allocations,
        unallocated: ordered[cursor..].to_vec(),
    })
}

/// [`allocate`] with a `ChaCha8Rng` seeded from `seed`.
///
/// Identical seed, roster, rooms, and rules reproduce the allocation
/// bit for bit, including branch mixing.
pub fn allocate_seeded(
    roster: &[StudentRecord],
    rooms: &[RoomGeometry],
    rules: &SeatingRules,
    seed: u64,
) -> Result<AllocationResult, AllocationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    allocate(roster, rooms, rules, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proctor_core::GeometryError;
    use proctor_test_utils::{labeled_room, room, roster};

    #[test]
    fn splits_in_room_order_and_tracks_leftovers() {
        let students = roster(&["CSE"], 12);
        let rooms = [labeled_room("101", 5, 1, 5), labeled_room("102", 5, 1, 5)];
        let result = allocate_seeded(&students, &rooms, &SeatingRules::default(), 0).unwrap();

        assert_eq!(result.rooms.len(), 2);
        assert_eq!(result.rooms[0].students.len(), 5);
        assert_eq!(result.rooms[1].students.len(), 5);
        assert_eq!(result.unallocated.len(), 2);
        assert_eq!(result.rooms[0].geometry.label.number.as_deref(), Some("101"));
        // Leftovers keep their relative order from the ordered sequence
        // (lexicographic: "CSE8" and "CSE9" sort after "CSE12").
        assert_eq!(result.unallocated[0].enrollment_no, "CSE8");
        assert_eq!(result.unallocated[1].enrollment_no, "CSE9");
    }

    #[test]
    fn rooms_after_exhaustion_are_omitted() {
        let students = roster(&["CSE"], 3);
        let rooms = [room(2, 2), room(2, 2), room(2, 2)];
        let result = allocate_seeded(&students, &rooms, &SeatingRules::default(), 0).unwrap();

        assert_eq!(result.rooms.len(), 1);
        assert_eq!(result.rooms[0].students.len(), 3);
        assert!(result.unallocated.is_empty());
    }

    #[test]
    fn empty_roster_yields_no_rooms() {
        let result = allocate_seeded(&[], &[room(2, 2)], &SeatingRules::default(), 0).unwrap();
        assert!(result.rooms.is_empty());
        assert!(result.unallocated.is_empty());
    }

    #[test]
    fn empty_room_list_leaves_everyone_unallocated() {
        let students = roster(&["CSE"], 4);
        let result = allocate_seeded(&students, &[], &SeatingRules::default(), 0).unwrap();
        assert!(result.rooms.is_empty());
        assert_eq!(result.unallocated.len(), 4);
    }

    #[test]
    fn invalid_geometry_rejects_the_whole_call() {
        let students = roster(&["CSE"], 4);
        let rooms = [room(2, 2), labeled_room("bad", 0, 2, 4)];
        let err = allocate_seeded(&students, &rooms, &SeatingRules::default(), 0).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::Geometry(GeometryError::ZeroDimension {
                dimension: "rows",
                ..
            })
        ));
    }

    #[test]
    fn invalid_double_column_rejects_before_any_room_fills() {
        let students = roster(&["CSE"], 4);
        // First room is wide enough, second is not; validation is
        // up-front, so even the first room must not be allocated.
        let rooms = [room(2, 6), room(2, 2)];
        let rules = SeatingRules {
            double_columns: vec![5],
            ..SeatingRules::default()
        };
        assert!(allocate_seeded(&students, &rooms, &rules, 0).is_err());
    }

    #[test]
    fn splitting_uses_capacity_not_grid_shape() {
        let students = roster(&["CSE"], 10);
        // Declared capacity 6 in a 4x2 grid: the chunk is capped at 6.
        let rooms = [labeled_room("201", 4, 2, 6)];
        let result = allocate_seeded(&students, &rooms, &SeatingRules::default(), 0).unwrap();

        assert_eq!(result.rooms[0].students.len(), 6);
        assert_eq!(result.rooms[0].placed_count(), 6);
        assert_eq!(result.unallocated.len(), 4);
        assert_eq!(result.rooms[0].utilization, 100.0);
    }

    #[test]
    fn utilization_reflects_partial_fill() {
        let students = roster(&["CSE"], 3);
        let result =
            allocate_seeded(&students, &[room(2, 3)], &SeatingRules::default(), 0).unwrap();
        assert_eq!(result.rooms[0].utilization, 50.0);
    }

    #[test]
    fn roster_and_rooms_are_not_mutated() {
        let students = roster(&["ME", "CSE"], 2);
        let rooms = [room(2, 2)];
        let students_before = students.clone();
        let rooms_before = rooms.to_vec();

        let rules = SeatingRules {
            branch_mixing: true,
            ..SeatingRules::default()
        };
        allocate_seeded(&students, &rooms, &rules, 9).unwrap();

        assert_eq!(students, students_before);
        assert_eq!(rooms.to_vec(), rooms_before);
    }
}
