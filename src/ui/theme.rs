use crossterm::style::Color;

/// Design tokens for the tprompts CLI.
///
/// Only five semantic colors; icons are sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const DEFAULT: &str = "★";

    // Command identifiers (used in headers).
    pub const INSTALL: &str = "📦";
    pub const REMOVE: &str = "🗑";
    pub const REPO: &str = "📚";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const DEFAULT: &str = "*";

    pub const INSTALL: &str = "[INSTALL]";
    pub const REMOVE: &str = "[DEL]";
    pub const REPO: &str = "[REPO]";
}
