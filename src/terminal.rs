//! Terminal color capability
//!
//! Detected once at startup and handed to the engine as `FORCE_COLOR`, so
//! tools that only see a pipe still know the user's terminal supports color.

/// Source of the terminal's color level
pub trait TerminalCapability {
    /// `None` when color is unsupported, otherwise 1 (basic), 2 (256) or 3 (truecolor)
    fn color_level(&self) -> Option<u8>;
}

/// Capability of the real stdout, as seen by `console`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTerminal;

impl TerminalCapability for ConsoleTerminal {
    fn color_level(&self) -> Option<u8> {
        // An explicit FORCE_COLOR is inherited by the engine as-is
        if std::env::var_os("FORCE_COLOR").is_some() || !console::colors_enabled() {
            return None;
        }

        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        Some(level_from_env(colorterm.as_deref(), term.as_deref()))
    }
}

/// Color level of a terminal already known to support color
pub fn level_from_env(colorterm: Option<&str>, term: Option<&str>) -> u8 {
    if matches!(colorterm, Some("truecolor" | "24bit")) {
        3
    } else if term.is_some_and(|term| term.contains("256")) {
        2
    } else {
        1
    }
}
