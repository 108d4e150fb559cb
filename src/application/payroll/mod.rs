//! Payroll store
//!
//! The in-memory roster plus its file-backed persistence, exposing every
//! menu action as a method.

mod error;
mod report;
mod use_case;

pub use error::AddError;
pub use report::{LineDiagnostic, LoadOutcome, LoadReport, SaveReport};
pub use use_case::{NewEmployee, PayrollStore};
