//! Domain Entities
//!
//! - `EmployeeRecord` - one employee and its derived salary
//! - `Roster` - the ordered, id-unique collection of records

mod employee;
mod roster;

pub use employee::EmployeeRecord;
pub use roster::Roster;
