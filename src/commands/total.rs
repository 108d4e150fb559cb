use std::path::Path;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::TotalEvent};
use crate::ui::views::payroll::render_total;

pub fn cmd_total(file: &Path, ui: &UiContext) -> Result<()> {
    let store = super::load_store(file, ui)?;
    let total = store.total_payroll();

    if ui.json {
        emit_event(&TotalEvent::new(store.list_employees().len(), total))?;
    } else {
        println!("{}", render_total(total, ui.color));
    }
    Ok(())
}
