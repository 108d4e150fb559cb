use std::path::Path;

use anyhow::Result;

use paydesk::domain::value_objects::parse_id;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::SalaryEvent};
use crate::ui::views::payroll::{
    render_invalid_id, render_not_found, render_salary, EMPLOYEE_NOT_FOUND, INVALID_ID,
};

pub fn cmd_salary(file: &Path, raw_id: &str, ui: &UiContext) -> Result<()> {
    let Some(id) = parse_id(raw_id) else {
        super::fail(
            ui,
            "invalid_id",
            INVALID_ID.to_string(),
            render_invalid_id(ui.color),
        );
    };

    let store = super::load_store(file, ui)?;
    match store.calculate_salary_for(id) {
        Some((record, salary)) => {
            if ui.json {
                emit_event(&SalaryEvent::new(record, salary))?;
            } else {
                println!("{}", render_salary(record, salary));
            }
            Ok(())
        }
        None => super::fail(
            ui,
            "not_found",
            EMPLOYEE_NOT_FOUND.to_string(),
            render_not_found(ui.color),
        ),
    }
}
