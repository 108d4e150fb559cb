//! Employee record entity
//!
//! A record is created once, by the add path or by decoding one line of the
//! data file, and never changes afterwards.

use rust_decimal::Decimal;

use crate::domain::value_objects::{deduction_rate, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    id: i32,
    name: String,
    role: Role,
    basic_pay: Decimal,
    allowances: Decimal,
}

impl EmployeeRecord {
    /// Build a record from already-validated parts.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        role: Role,
        basic_pay: Decimal,
        allowances: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            basic_pay,
            allowances,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn basic_pay(&self) -> Decimal {
        self.basic_pay
    }

    pub fn allowances(&self) -> Decimal {
        self.allowances
    }

    /// Amount withheld from basic pay
    pub fn deductions(&self) -> Decimal {
        deduction_rate() * self.basic_pay
    }

    /// `basic_pay + allowances - 10% of basic_pay`
    ///
    /// Amounts within `max_amount()` never come near `Decimal`'s range; past
    /// it the sum saturates instead of panicking.
    pub fn calculate_salary(&self) -> Decimal {
        (self.basic_pay - self.deductions()).saturating_add(self.allowances)
    }
}
