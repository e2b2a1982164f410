//! The Proctor allocation pipeline.
//!
//! A pure, synchronous computation with no I/O: the caller supplies a
//! roster, an ordered room list, and [`SeatingRules`]; the engine
//! returns an [`AllocationResult`] without mutating any input. The
//! stages run in a fixed order:
//!
//! 1. [`filter::eligible`] — drop students failing the attendance,
//!    status, or fee predicates.
//! 2. [`order::arrange`] — deterministic branch sort, or branch-mixing
//!    interleave when the rules ask for it.
//! 3. [`allocate::allocate`] — split the ordered sequence across rooms
//!    in caller order and build each room's grid.
//!
//! The only nondeterminism is the branch-mix shuffle, which takes an
//! injected [`rand::Rng`]; [`allocate::allocate_seeded`] wraps a
//! `ChaCha8Rng` for reproducible runs. Independent calls share no
//! state and may run in parallel.
//!
//! [`SeatingRules`]: proctor_core::SeatingRules
//! [`AllocationResult`]: proctor_core::AllocationResult

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocate;
pub mod filter;
pub mod grid;
pub mod order;
pub mod position;

pub use allocate::{allocate, allocate_seeded};
pub use filter::eligible;
pub use grid::{build_grid, utilization_percent};
pub use order::arrange;
pub use position::position_for_index;
