//! Paydesk CLI - console payroll register
//!
//! Usage: paydesk [COMMAND]
//!
//! Without a command the interactive menu runs. Commands:
//!   list     Show every employee
//!   salary   Show one employee's net salary
//!   total    Show the total net payroll
//!   add      Add an employee and save

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use paydesk::config::Config;
use paydesk::presentation::{Cli, Commands};

mod commands;
mod logging;
mod ui;

use ui::context::UiContext;

fn main() {
    if let Err(err) = run() {
        eprint!("{}", crate::ui::error::format_error(&err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default_with_warnings(Some(&cwd));
    let ui = UiContext::new(cli.json, cli.color, &config);

    if !cli.json {
        for warning in &warnings {
            eprintln!(
                "{}",
                crate::ui::views::config::render_config_warning(warning, ui.color, ui.unicode)
            );
        }
    }

    let file: PathBuf = cli.file.unwrap_or(config.storage.file);
    tracing::debug!(file = %file.display(), "using data file");

    match cli.command {
        None => commands::interactive::cmd_interactive(&file, &ui),
        Some(Commands::List) => commands::list::cmd_list(&file, &ui),
        Some(Commands::Salary { id }) => commands::salary::cmd_salary(&file, &id, &ui),
        Some(Commands::Total) => commands::total::cmd_total(&file, &ui),
        Some(Commands::Add {
            name,
            id,
            role,
            basic_pay,
            allowances,
        }) => commands::add::cmd_add(
            &file,
            paydesk::NewEmployee {
                name: &name,
                id: &id,
                role: &role,
                basic_pay: &basic_pay,
                allowances: &allowances,
            },
            &ui,
        ),
    }
}
