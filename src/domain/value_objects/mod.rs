//! Domain Value Objects
//!
//! Immutable value types shared by entities, ports and the application layer.

mod money;
mod record_field;
mod role;

pub use money::{deduction_rate, max_amount, parse_amount, parse_id, AmountError};
pub use record_field::RecordField;
pub use role::{ParseRoleError, Role};
