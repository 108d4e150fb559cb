//! Command implementations
//!
//! Each subcommand loads the data file once, then performs its operation.

pub mod add;
pub mod interactive;
pub mod list;
pub mod salary;
pub mod total;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use paydesk::presentation::{create_payroll_store, ConcretePayrollStore};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::LoadEvent};
use crate::ui::views::load::render_load_report;

/// Open and load the data file for a one-shot command.
///
/// Text mode reports the load on stderr so stdout carries only the result.
pub(crate) fn load_store(file: &Path, ui: &UiContext) -> Result<ConcretePayrollStore> {
    let mut store = create_payroll_store(file);
    let report = store
        .load_from_file()
        .with_context(|| format!("could not load {}", file.display()))?;

    if ui.json {
        emit_event(&LoadEvent::new(&report))?;
    } else if report.has_skipped() || report.loaded() == 0 {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", render_load_report(&report, ui.color))?;
    }
    Ok(store)
}

/// Print a failure and exit non-zero
pub(crate) fn fail(ui: &UiContext, kind: &str, text: String, rendered: String) -> ! {
    if ui.json {
        let _ = emit_event(&crate::ui::json::events::ErrorEvent::new(kind, text));
    } else {
        println!("{rendered}");
    }
    let _ = std::io::stdout().flush();
    std::process::exit(1);
}
