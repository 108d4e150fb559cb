use paydesk::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let hint = warning
        .suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default();
    format!(
        "{} Unknown config key '{}' in {}{}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location,
        hint
    )
}
