use std::path::Path;

use anyhow::{Context, Result};

use paydesk::NewEmployee;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::EmployeeAddedEvent};
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::payroll::{render_employee_added, render_saved};

pub fn cmd_add(file: &Path, input: NewEmployee<'_>, ui: &UiContext) -> Result<()> {
    let mut store = super::load_store(file, ui)?;

    let id = match store.add_employee(input) {
        Ok(record) => record.id(),
        Err(err) => {
            let text = err.to_string();
            let rendered = ColoredText::error(text.as_str()).render(ui.color);
            super::fail(ui, "invalid_employee", text, rendered);
        }
    };

    store
        .save_to_file()
        .with_context(|| format!("employee not saved to {}", file.display()))?;

    if ui.json {
        if let Some(record) = store.find_by_id(id) {
            emit_event(&EmployeeAddedEvent::new(record, store.path()))?;
        }
    } else {
        println!("{}", render_employee_added(ui.color));
        println!("{}", render_saved(ui.color));
    }
    Ok(())
}
