//! Shared JSON event types for consistent CLI output.
//!
//! Amounts are serialized as decimal strings so no precision is lost.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use paydesk::application::{LineDiagnostic, LoadOutcome, LoadReport};
use paydesk::{EmployeeRecord, Role};

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeJson<'a> {
    pub id: i32,
    pub name: &'a str,
    pub role: Role,
    pub basic_pay: Decimal,
    pub allowances: Decimal,
    pub salary: Decimal,
}

impl<'a> From<&'a EmployeeRecord> for EmployeeJson<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name(),
            role: record.role(),
            basic_pay: record.basic_pay(),
            allowances: record.allowances(),
            salary: record.calculate_salary(),
        }
    }
}

/// `paydesk list`
#[derive(Debug, Clone, Serialize)]
pub struct EmployeesEvent<'a> {
    pub event: &'static str,
    pub count: usize,
    pub employees: Vec<EmployeeJson<'a>>,
}

impl<'a> EmployeesEvent<'a> {
    pub fn new(records: &'a [EmployeeRecord]) -> Self {
        Self {
            event: "employees",
            count: records.len(),
            employees: records.iter().map(EmployeeJson::from).collect(),
        }
    }
}

/// `paydesk salary <ID>`
#[derive(Debug, Clone, Serialize)]
pub struct SalaryEvent<'a> {
    pub event: &'static str,
    pub id: i32,
    pub name: &'a str,
    pub role: Role,
    pub salary: Decimal,
}

impl<'a> SalaryEvent<'a> {
    pub fn new(record: &'a EmployeeRecord, salary: Decimal) -> Self {
        Self {
            event: "salary",
            id: record.id(),
            name: record.name(),
            role: record.role(),
            salary,
        }
    }
}

/// `paydesk total`; `total` is null when there are no employees
#[derive(Debug, Clone, Serialize)]
pub struct TotalEvent {
    pub event: &'static str,
    pub employees: usize,
    pub total: Option<Decimal>,
}

impl TotalEvent {
    pub fn new(employees: usize, total: Option<Decimal>) -> Self {
        Self {
            event: "total",
            employees,
            total,
        }
    }
}

/// `paydesk add`
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeAddedEvent<'a> {
    pub event: &'static str,
    pub employee: EmployeeJson<'a>,
    pub path: String,
}

impl<'a> EmployeeAddedEvent<'a> {
    pub fn new(record: &'a EmployeeRecord, path: &Path) -> Self {
        Self {
            event: "employee_added",
            employee: EmployeeJson::from(record),
            path: path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedLineJson<'a> {
    pub line: usize,
    pub content: &'a str,
    pub problem: String,
}

impl<'a> From<&'a LineDiagnostic> for SkippedLineJson<'a> {
    fn from(diag: &'a LineDiagnostic) -> Self {
        Self {
            line: diag.line_no,
            content: &diag.content,
            problem: diag.problem.to_string(),
        }
    }
}

/// Emitted by every subcommand after reading the data file
#[derive(Debug, Clone, Serialize)]
pub struct LoadEvent<'a> {
    pub event: &'static str,
    pub path: String,
    pub outcome: &'static str,
    pub loaded: usize,
    pub skipped: Vec<SkippedLineJson<'a>>,
}

impl<'a> LoadEvent<'a> {
    pub fn new(report: &'a LoadReport) -> Self {
        let outcome = match report.outcome {
            LoadOutcome::CreatedNew => "created_new",
            LoadOutcome::Empty => "empty",
            LoadOutcome::NoValidRecords => "no_valid_records",
            LoadOutcome::Loaded { .. } => "loaded",
        };
        Self {
            event: "load",
            path: report.path.display().to_string(),
            outcome,
            loaded: report.loaded(),
            skipped: report.skipped.iter().map(SkippedLineJson::from).collect(),
        }
    }
}

/// A command-level failure (validation, lookup miss, I/O)
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub kind: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(kind: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paydesk::domain::ports::LineProblem;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    #[test]
    fn employee_amounts_serialize_as_strings() {
        let record = EmployeeRecord::new(1, "Alice", Role::Manager, dec!(1000), dec!(200));
        let value = serde_json::to_value(EmployeeJson::from(&record)).unwrap();
        assert_eq!(value["role"], "Manager");
        assert_eq!(value["basic_pay"], "1000");
        assert_eq!(value["salary"], "1100.00");
    }

    #[test]
    fn empty_total_is_null() {
        let value = serde_json::to_value(TotalEvent::new(0, None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "event": "total", "employees": 0, "total": null })
        );
    }

    #[test]
    fn load_event_lists_skipped_lines() {
        let report = LoadReport {
            path: PathBuf::from("employees.txt"),
            outcome: LoadOutcome::NoValidRecords,
            skipped: vec![LineDiagnostic {
                line_no: 2,
                content: "Bob,5,Manager".to_string(),
                problem: LineProblem::FieldCount { found: 3 },
            }],
        };
        let value = serde_json::to_value(LoadEvent::new(&report)).unwrap();
        assert_eq!(value["outcome"], "no_valid_records");
        assert_eq!(value["skipped"][0]["line"], 2);
        assert_eq!(value["skipped"][0]["problem"], "expected 5 fields, found 3");
    }
}
