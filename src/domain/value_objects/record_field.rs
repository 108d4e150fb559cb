//! The parsed fields of an employee record, for error reporting

/// Numeric fields of a record that can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    BasicPay,
    Allowances,
}

impl RecordField {
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Id => "ID",
            RecordField::BasicPay => "Basic Pay",
            RecordField::Allowances => "Allowances",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
