use std::path::Path;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const MENU: &str = "\
1. Add New Employee
2. Display All Employees
3. Calculate and Display Employee Salary
4. Display Total Payroll
5. Save Employee Data
6. Exit";

pub const PROMPT: &str = "Choose an option: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Banner printed once before the first menu
pub fn render_header(path: &Path, supports_color: bool) -> String {
    format!(
        "{} {}",
        ColoredText::info("Paydesk").bold().render(supports_color),
        ColoredText::dim(format!("(data file: {})", path.display())).render(supports_color)
    )
}

pub fn render_unsaved_warning(path: &Path, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!(
            "Unsaved employees were not written to {}.",
            path.display()
        ))
        .render(supports_color)
    )
}
