//! Domain Layer
//!
//! The payroll core: employee records, the roster they live in, and the
//! port the roster is persisted through.
//!
//! ## Structure
//!
//! - `entities/` - `EmployeeRecord` and the ordered `Roster`
//! - `value_objects/` - `Role`, `RecordField`, amount and id parsing
//! - `ports/` - `RosterRepository` and its error vocabulary
//!
//! Nothing in this layer touches the file system.

pub mod entities;
pub mod ports;
pub mod value_objects;
