//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod roster_repository;

pub use roster_repository::{DecodedLine, LineProblem, RosterError, RosterRepository, StoredRoster};
