//! JSON output utilities for CLI commands.
//!
//! Every subcommand in `--json` mode writes NDJSON: one object per line, each
//! carrying an `event` field. Event payloads live in `events`.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit_event(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_newline_terminated() {
        let mut out = Vec::new();
        write_event(&mut out, &serde_json::json!({ "event": "total" })).unwrap();
        write_event(&mut out, &serde_json::json!({ "event": "total" })).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"event\":\"total\"}\n{\"event\":\"total\"}\n"
        );
    }
}
