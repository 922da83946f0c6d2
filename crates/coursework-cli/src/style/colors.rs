//! Semantic color palette for terminal output.
//!
//! Uses owo-colors for zero-allocation terminal coloring.

use owo_colors::{OwoColorize, Style};

/// Returns the style for error messages (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Returns the style for highlighted values (cyan).
pub fn info_style() -> Style {
    Style::new().cyan()
}

/// Returns the style for muted/secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Returns the style for section headers (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Apply error styling (red bold).
    fn error(&self) -> String;
    /// Apply info styling (cyan).
    fn info(&self) -> String;
    /// Apply muted styling (dimmed).
    fn muted(&self) -> String;
    /// Apply header styling (bold).
    fn header(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn error(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(error_style()).to_string()
        }
    }

    fn info(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(info_style()).to_string()
        }
    }

    fn muted(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(muted_style()).to_string()
        }
    }

    fn header(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(header_style()).to_string()
        }
    }
}
