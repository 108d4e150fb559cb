use std::path::Path;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::EmployeesEvent};
use crate::ui::views::roster::render_roster_table;

pub fn cmd_list(file: &Path, ui: &UiContext) -> Result<()> {
    let store = super::load_store(file, ui)?;
    let records = store.list_employees();

    if ui.json {
        emit_event(&EmployeesEvent::new(records))?;
    } else {
        println!("{}", render_roster_table(records, ui.color, ui.unicode));
    }
    Ok(())
}
