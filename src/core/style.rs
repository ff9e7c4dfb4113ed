//! Colorization of the bracketed fields of a log line

use colored::Color;
use serde::{Deserialize, Serialize};

/// Color of the timestamp field.
pub const TIMESTAMP_COLOR: Color = Color::Cyan;

/// Color of the file and function parts of the call-site field.
pub const CALL_SITE_COLOR: Color = Color::Magenta;

/// When to colorize output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize only when the destination is a terminal.
    #[default]
    Auto,
    /// Always colorize, whatever the destination.
    Always,
    /// Plain text.
    Never,
}

impl ColorMode {
    /// Pick a styler for a destination.
    pub fn styler(self, destination_is_terminal: bool) -> Styler {
        let enabled = match self {
            ColorMode::Auto => destination_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        Styler { enabled }
    }
}

/// Applies colors to text fields, or passes them through unchanged.
///
/// Escape codes are emitted whenever the styler is enabled. `colored`'s own
/// switch keys off stdout and the environment, while the logger writes to its
/// appender, so only the `ColorMode` decision applies here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
        } else {
            text.to_string()
        }
    }
}
