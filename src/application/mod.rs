//! Application Layer
//!
//! Use cases that orchestrate the payroll flow. This layer:
//! - Depends on the domain layer (entities, ports)
//! - Coordinates the roster with its repository
//!
//! ## Use Cases
//!
//! - `PayrollStore` - add, list, look up, total, save and load employees

pub mod payroll;

pub use payroll::{
    AddError, LineDiagnostic, LoadOutcome, LoadReport, NewEmployee, PayrollStore, SaveReport,
};
