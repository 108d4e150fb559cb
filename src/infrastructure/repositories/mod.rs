//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod flat_file;
pub mod line_codec;

pub use flat_file::{FlatFileRosterRepository, DEFAULT_DATA_FILE};
