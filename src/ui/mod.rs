//! Terminal UI for the paydesk binary
//!
//! Views return strings; commands decide where they are written.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
