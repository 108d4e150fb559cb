//! Configuration module for Paydesk
//!
//! Sources, highest priority first:
//! 1. CLI flags (`--file`, `--color`)
//! 2. Environment variables (`PAYDESK_*`)
//! 3. Project config (`./paydesk.toml`)
//! 4. User config (`~/.config/paydesk/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, StorageConfig};
