use crossterm::style::Color;

/// Design tokens for the paydesk UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and rules must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
}

pub mod rules {
    pub const HORIZONTAL: &str = "─";
    pub const CROSS: &str = "┼";
    pub const VERTICAL: &str = "│";
}

pub mod rules_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const CROSS: &str = "+";
    pub const VERTICAL: &str = "|";
}

/// Table rule glyphs for the current unicode mode
pub fn rule_glyphs(unicode: bool) -> (&'static str, &'static str, &'static str) {
    if unicode {
        (rules::HORIZONTAL, rules::CROSS, rules::VERTICAL)
    } else {
        (rules_ascii::HORIZONTAL, rules_ascii::CROSS, rules_ascii::VERTICAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_rules_are_plain_ascii() {
        let (h, c, v) = rule_glyphs(false);
        assert!(h.is_ascii() && c.is_ascii() && v.is_ascii());
    }

    #[test]
    fn unicode_rules_use_box_drawing() {
        assert_eq!(rule_glyphs(true).2, "│");
    }
}
