use paydesk::application::{LineDiagnostic, LoadOutcome, LoadReport};
use paydesk::domain::ports::{LineProblem, RosterError};

use crate::ui::primitives::text::ColoredText;

/// Per-line diagnostics first, then the outcome message.
pub fn render_load_report(report: &LoadReport, supports_color: bool) -> String {
    let mut lines: Vec<String> = report
        .skipped
        .iter()
        .map(|diag| ColoredText::warning(diagnostic_text(diag)).render(supports_color))
        .collect();

    let outcome = match report.outcome {
        LoadOutcome::CreatedNew => ColoredText::info(
            "No employee data file found. A new file has been created.",
        ),
        LoadOutcome::Empty => ColoredText::info(
            "Employee data file is empty. Please add employees and save data.",
        ),
        LoadOutcome::NoValidRecords => {
            ColoredText::warning("No valid employee records found in the file.")
        }
        LoadOutcome::Loaded { .. } => ColoredText::success("Employee data loaded from file."),
    };
    lines.push(outcome.render(supports_color));
    lines.join("\n")
}

fn diagnostic_text(diag: &LineDiagnostic) -> String {
    let line = &diag.content;
    match &diag.problem {
        LineProblem::FieldCount { .. } => format!("Invalid line format: {line}"),
        LineProblem::InvalidRole { .. } => format!("Invalid role in file: {line}"),
        problem => format!("Error processing line: {line}. Details: {problem}"),
    }
}

pub fn render_load_failed(err: &RosterError, supports_color: bool) -> String {
    ColoredText::error(format!(
        "Could not load employee data: {err}. Starting with no employees; the file will not be overwritten."
    ))
    .render(supports_color)
}
