use unicode_width::UnicodeWidthStr;

use paydesk::EmployeeRecord;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub const NO_EMPLOYEES: &str = "No employees to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const COLUMNS: [(&str, Align); 6] = [
    ("ID", Align::Right),
    ("Name", Align::Left),
    ("Role", Align::Left),
    ("Basic Pay", Align::Right),
    ("Allowances", Align::Right),
    ("Net Salary", Align::Right),
];

/// One row per employee, in roster order.
pub fn render_roster_table(
    records: &[EmployeeRecord],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if records.is_empty() {
        return ColoredText::warning(NO_EMPLOYEES).render(supports_color);
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.id().to_string(),
                display_name(r.name()),
                r.role().to_string(),
                r.basic_pay().to_string(),
                r.allowances().to_string(),
                r.calculate_salary().to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|(title, _)| title.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let (horizontal, cross, vertical) = theme::rule_glyphs(supports_unicode);
    let separator = format!(" {vertical} ");

    let header = COLUMNS
        .iter()
        .zip(widths)
        .map(|((title, align), width)| pad(title, width, *align))
        .collect::<Vec<_>>()
        .join(&separator);
    let rule = widths
        .iter()
        .map(|w| horizontal.repeat(*w))
        .collect::<Vec<_>>()
        .join(&format!("{horizontal}{cross}{horizontal}"));

    let mut lines = vec![
        ColoredText::plain(header).bold().render(supports_color),
        ColoredText::dim(rule).render(supports_color),
    ];
    for row in &rows {
        let line = row
            .iter()
            .zip(COLUMNS.iter().zip(widths))
            .map(|(cell, ((_, align), width))| pad(cell, width, *align))
            .collect::<Vec<_>>()
            .join(&separator);
        lines.push(line);
    }
    lines.join("\n")
}

/// Names may carry escaped newlines from the data file; keep rows on one line.
fn display_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}
