//! Roster entity
//!
//! The in-memory, insertion-ordered collection of employee records.
//! Ids are unique: `insert` refuses a record whose id is already present.

use rust_decimal::Decimal;

use super::EmployeeRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<EmployeeRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Returns `None`, leaving the roster as it was, when
    /// the id is already taken.
    pub fn insert(&mut self, record: EmployeeRecord) -> Option<&EmployeeRecord> {
        if self.contains_id(record.id()) {
            return None;
        }
        self.records.push(record);
        self.records.last()
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    /// First record with this id
    pub fn find(&self, id: i32) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn all(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Sum of every salary, or `None` when there is nothing to sum.
    /// Saturates at `Decimal::MAX` rather than overflowing.
    pub fn total_salary(&self) -> Option<Decimal> {
        if self.records.is_empty() {
            return None;
        }
        Some(
            self.records
                .iter()
                .map(EmployeeRecord::calculate_salary)
                .fold(Decimal::ZERO, Decimal::saturating_add),
        )
    }
}
