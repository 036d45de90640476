//! Report formatting utilities for terminal output

use std::fmt::Display;

pub const GREEN: &str = "92";
pub const YELLOW: &str = "93";
pub const RED: &str = "91";
pub const CYAN: &str = "96";
pub const BOLD_GREEN: &str = "1;32";

/// ANSI colouring that can be switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A palette that never emits escape codes
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Wrap `text` in the SGR `code` when colour is on
    pub fn paint(&self, text: impl Display, code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

/// Create a simple bar chart representation
///
/// The filled part is truncated, so a bar only fills up at exactly 100%.
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as i128 * width as i128) / max_value as i128) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section header like `--- Suspect Logs ---`
pub fn section(title: &str) -> String {
    format!("--- {} ---", title)
}

/// Format a banner header like `====== Status (2025-06) ======`
pub fn banner(title: &str) -> String {
    format!("====== {} ======", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(Palette::new(true).paint(20, GREEN), "\x1b[92m20\x1b[0m");
        assert_eq!(Palette::plain().paint(20, GREEN), "20");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(500, 1000, 20);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar.chars().count(), 20);
    }

    #[test]
    fn test_format_bar_truncates() {
        let bar = format_bar(999, 1000, 20);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 19);
    }

    #[test]
    fn test_format_bar_empty() {
        assert_eq!(format_bar(0, 1000, 4), "░░░░");
        assert_eq!(format_bar(10, 0, 4), "░░░░");
    }

    #[test]
    fn test_headers() {
        assert_eq!(section("Suspect Logs"), "--- Suspect Logs ---");
        assert_eq!(banner("Status (2025-06)"), "====== Status (2025-06) ======");
    }
}
