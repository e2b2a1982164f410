//! Reusable roster and room fixtures for Proctor tests.
//!
//! Builders here favor short call sites over flexibility: most tests
//! need a roster of a few branches and one or two plain rooms, nothing
//! more.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{labeled_room, roster, room, student};
