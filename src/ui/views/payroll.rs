use rust_decimal::Decimal;

use paydesk::application::AddError;
use paydesk::domain::ports::RosterError;
use paydesk::domain::value_objects::{max_amount, RecordField};
use paydesk::EmployeeRecord;

use crate::ui::primitives::text::ColoredText;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found.";
pub const INVALID_ID: &str = "Invalid ID.";
pub const NO_PAYROLL: &str = "No employees to calculate payroll.";

pub fn render_salary(record: &EmployeeRecord, salary: Decimal) -> String {
    format!(
        "Salary for {} ({}): {}",
        record.name(),
        record.role(),
        salary
    )
}

pub fn render_not_found(supports_color: bool) -> String {
    ColoredText::warning(EMPLOYEE_NOT_FOUND).render(supports_color)
}

pub fn render_invalid_id(supports_color: bool) -> String {
    ColoredText::error(INVALID_ID).render(supports_color)
}

pub fn render_total(total: Option<Decimal>, supports_color: bool) -> String {
    match total {
        Some(total) => format!("Total Payroll: {total}"),
        None => ColoredText::warning(NO_PAYROLL).render(supports_color),
    }
}

pub fn render_employee_added(supports_color: bool) -> String {
    ColoredText::success("Employee added successfully.").render(supports_color)
}

/// Menu wording for a refused add
pub fn render_add_error(err: &AddError, supports_color: bool) -> String {
    let text = match err {
        AddError::InvalidId { .. } | AddError::DuplicateId { .. } => {
            "Invalid or duplicate ID.".to_string()
        }
        AddError::InvalidAmount { field, .. } => format!("Invalid {field}."),
        AddError::NegativeAmount { field, .. } => {
            format!("Invalid {field}. {} cannot be negative.", amount_noun(*field))
        }
        AddError::AmountTooLarge { field, .. } => format!(
            "Invalid {field}. {} cannot be larger than {}.",
            amount_noun(*field),
            max_amount()
        ),
        AddError::InvalidRole { .. } => "Invalid role. Employee not added.".to_string(),
    };
    ColoredText::error(text).render(supports_color)
}

fn amount_noun(field: RecordField) -> &'static str {
    match field {
        RecordField::BasicPay => "Basic pay",
        RecordField::Allowances => "Allowances",
        RecordField::Id => "ID",
    }
}

pub fn render_saved(supports_color: bool) -> String {
    ColoredText::success("Employee data saved to file.").render(supports_color)
}

pub fn render_save_failed(err: &RosterError, supports_color: bool) -> String {
    ColoredText::error(format!(
        "Could not save employee data: {err}. Your changes are still in memory."
    ))
    .render(supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paydesk::Role;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    #[test]
    fn salary_line_names_employee_and_role() {
        let record = EmployeeRecord::new(1, "Alice", Role::Manager, dec!(1000), dec!(200));
        assert_eq!(
            render_salary(&record, record.calculate_salary()),
            "Salary for Alice (Manager): 1100.00"
        );
    }

    #[test]
    fn total_distinguishes_empty_from_zero() {
        assert_eq!(render_total(None, false), NO_PAYROLL);
        assert_eq!(render_total(Some(Decimal::ZERO), false), "Total Payroll: 0");
    }

    #[test]
    fn add_errors_use_menu_wording() {
        assert_eq!(
            render_add_error(&AddError::DuplicateId { id: 1 }, false),
            "Invalid or duplicate ID."
        );
        assert_eq!(
            render_add_error(
                &AddError::InvalidAmount {
                    field: RecordField::Allowances,
                    value: "x".to_string()
                },
                false
            ),
            "Invalid Allowances."
        );
        assert_eq!(
            render_add_error(
                &AddError::NegativeAmount {
                    field: RecordField::BasicPay,
                    value: "-1".to_string()
                },
                false
            ),
            "Invalid Basic Pay. Basic pay cannot be negative."
        );
        assert_eq!(
            render_add_error(
                &AddError::AmountTooLarge {
                    field: RecordField::Allowances,
                    value: "1e30".to_string()
                },
                false
            ),
            "Invalid Allowances. Allowances cannot be larger than 1000000000000."
        );
        assert_eq!(
            render_add_error(
                &AddError::InvalidRole {
                    value: "Chef".to_string()
                },
                false
            ),
            "Invalid role. Employee not added."
        );
    }

    #[test]
    fn save_failure_mentions_the_cause() {
        let err = RosterError::Access {
            path: PathBuf::from("employees.txt"),
            message: "read-only file system".to_string(),
        };
        insta::assert_snapshot!(render_save_failed(&err, false), @"Could not save employee data: failed to access employee data file employees.txt: read-only file system. Your changes are still in memory.");
    }
}
