//! Paydesk - console payroll register
//!
//! Paydesk keeps employee records (name, id, role, basic pay, allowances) in a
//! plain-text data file and computes net salaries from them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AddError, LoadOutcome, LoadReport, NewEmployee, PayrollStore, SaveReport};
pub use config::Config;
pub use domain::entities::{EmployeeRecord, Roster};
pub use domain::value_objects::Role;
pub use error::{PaydeskError, PaydeskResult};
