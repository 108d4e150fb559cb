//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::PathBuf;

use crate::application::PayrollStore;
use crate::infrastructure::FlatFileRosterRepository;

/// PayrollStore backed by the flat data file
pub type ConcretePayrollStore = PayrollStore<FlatFileRosterRepository>;

/// Create a payroll store for the data file at `path`.
///
/// Nothing is read yet; call `load_from_file` to populate it.
pub fn create_payroll_store(path: impl Into<PathBuf>) -> ConcretePayrollStore {
    PayrollStore::new(FlatFileRosterRepository::new(path))
}
