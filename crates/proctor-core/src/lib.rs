//! Core domain types for the Proctor seat allocation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the entities exchanged between the orchestration layer and the
//! allocation pipeline: student records, room geometry, seating rules,
//! seat grids, and validation error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod error;
pub mod room;
pub mod rules;
pub mod seat;
pub mod student;

pub use allocation::{AllocationResult, RoomAllocation};
pub use error::{AllocationError, GeometryError, RulesError};
pub use room::{RoomGeometry, RoomLabel};
pub use rules::{Arrangement, SeatingRules};
pub use seat::{Seat, SeatGrid, SeatPosition};
pub use student::StudentRecord;
