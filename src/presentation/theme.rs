//! Colors and icons shared by all text output.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Icon set, picked by terminal capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub pending: &'static str,
    pub arrow: &'static str,
}

impl Icons {
    pub const UNICODE: Icons = Icons {
        success: "✓",
        error: "✗",
        warning: "⚠",
        pending: "○",
        arrow: "→",
    };

    pub const ASCII: Icons = Icons {
        success: "[OK]",
        error: "[FAIL]",
        warning: "[WARN]",
        pending: "[ ]",
        arrow: "->",
    };

    pub fn for_unicode(unicode: bool) -> Icons {
        if unicode {
            Icons::UNICODE
        } else {
            Icons::ASCII
        }
    }
}
