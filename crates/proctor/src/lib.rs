//! Proctor: an exam seat allocation engine.
//!
//! This is the facade crate re-exporting the public API from the
//! Proctor sub-crates. For most users, adding `proctor` as a single
//! dependency is sufficient.
//!
//! The engine is a pure, synchronous library computation: give it a
//! roster, an ordered room list, and seating rules; get back a
//! room-by-room seating plan plus the students no room could absorb.
//! Persistence, import, and document rendering are caller concerns.
//!
//! # Quick start
//!
//! ```rust
//! use proctor::prelude::*;
//!
//! let roster = vec![
//!     StudentRecord {
//!         enrollment_no: "CSE001".into(),
//!         name: "A. Sharma".into(),
//!         program: "B.Tech".into(),
//!         branch: "CSE".into(),
//!         semester: 5,
//!         attendance_percent: 91.0,
//!         status: "Regular".into(),
//!         fee_status: "Paid".into(),
//!     },
//!     StudentRecord {
//!         enrollment_no: "ME001".into(),
//!         name: "B. Rao".into(),
//!         program: "B.Tech".into(),
//!         branch: "ME".into(),
//!         semester: 5,
//!         attendance_percent: 88.0,
//!         status: "Regular".into(),
//!         fee_status: "Paid".into(),
//!     },
//! ];
//! let rooms = vec![RoomGeometry {
//!     label: RoomLabel::default(),
//!     rows: 2,
//!     columns: 2,
//!     capacity: 4,
//! }];
//! let rules = SeatingRules {
//!     branch_mixing: true,
//!     ..SeatingRules::default()
//! };
//!
//! let result = allocate_seeded(&roster, &rooms, &rules, 42).unwrap();
//! assert_eq!(result.rooms.len(), 1);
//! assert_eq!(result.rooms[0].students.len(), 2);
//! assert!(result.unallocated.is_empty());
//!
//! // Seat coordinates come from the grid, never recomputed.
//! for (position, student) in result.rooms[0].placements() {
//!     println!("{} -> row {}, column {}", student.enrollment_no, position.row, position.column);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core domain types (`proctor-core`): students, rooms, rules, grids,
/// results, and validation errors.
pub use proctor_core as types;

/// The allocation pipeline (`proctor-engine`): eligibility filtering,
/// ordering, grid building, multi-room splitting, and the position
/// shortcut.
pub use proctor_engine as engine;

/// Common imports for typical Proctor usage.
///
/// ```rust
/// use proctor::prelude::*;
/// ```
pub mod prelude {
    pub use proctor_core::{
        AllocationError, AllocationResult, Arrangement, GeometryError, RoomAllocation,
        RoomGeometry, RoomLabel, RulesError, Seat, SeatGrid, SeatPosition, SeatingRules,
        StudentRecord,
    };
    pub use proctor_engine::{allocate, allocate_seeded, eligible, position_for_index};
}
