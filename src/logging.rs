//! Diagnostic logging to stderr
//!
//! User-facing output never goes through here; it is rendered by `ui`.

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an explicit `EnvFilter` directive
pub const LOG_ENV: &str = "PAYDESK_LOG";

/// Filter directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Calling it again is a no-op.
pub fn init(verbose: u8) -> Result<()> {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbose).to_string());
    let filter = EnvFilter::try_new(directive)?;

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // Already installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    Ok(())
}
