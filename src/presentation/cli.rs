//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --file) are inherited by all subcommands
//! - Without a subcommand the interactive menu runs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Paydesk - console payroll register
#[derive(Parser, Debug)]
#[command(name = "paydesk")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'paydesk' without arguments for the interactive menu.")]
pub struct Cli {
    /// Output format for scripts (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Employee data file (overrides config and PAYDESK_FILE)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every employee in the data file
    List,

    /// Show the net salary of one employee
    Salary {
        /// Employee ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Show the total net payroll
    Total,

    /// Add an employee and save the data file
    Add {
        /// Employee name
        #[arg(long)]
        name: String,

        /// Unique employee ID
        #[arg(long, allow_hyphen_values = true)]
        id: String,

        /// Manager, Developer or Intern
        #[arg(long)]
        role: String,

        /// Monthly basic pay
        #[arg(long, allow_hyphen_values = true)]
        basic_pay: String,

        /// Monthly allowances
        #[arg(long, allow_hyphen_values = true)]
        allowances: String,
    },
}
