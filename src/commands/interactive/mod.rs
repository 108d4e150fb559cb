//! Interactive command module
//!
//! The numbered menu: load once, then loop until Exit or end of input.

mod menu;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use paydesk::presentation::create_payroll_store;

use crate::ui::context::UiContext;
use crate::ui::views::load::{render_load_failed, render_load_report};
use crate::ui::views::menu::render_header;

pub fn cmd_interactive(file: &Path, ui: &UiContext) -> Result<()> {
    let mut store = create_payroll_store(file);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", render_header(store.path(), ui.color))?;
    match store.load_from_file() {
        Ok(report) => writeln!(out, "{}", render_load_report(&report, ui.color))?,
        Err(err) => writeln!(out, "{}", render_load_failed(&err, ui.color))?,
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    menu::run_menu(&mut store, &mut input, &mut out, ui)?;
    Ok(())
}
