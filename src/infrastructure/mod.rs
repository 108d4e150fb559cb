//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer owns all file I/O.
//!
//! ## Structure
//!
//! - `repositories/` - the flat-file roster repository and its line codec

pub mod repositories;

pub use repositories::FlatFileRosterRepository;
