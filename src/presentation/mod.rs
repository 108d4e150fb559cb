//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use paydesk::presentation::factory;
//!
//! let mut store = factory::create_payroll_store("employees.txt");
//! let report = store.load_from_file()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_payroll_store, ConcretePayrollStore};
