//! Output helper functions for consistent styled messages.

use super::colors::SemanticStyle;

/// Prints an error message with an X mark.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a hint/suggestion with an arrow.
pub fn print_hint(msg: &str) {
    println!("{} {}", "→".muted(), msg.muted());
}

/// Prints a section heading preceded by a blank line.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("── {title}").header());
}

/// Prints a labeled key-value pair with proper indentation.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {}", key.muted(), value.info());
}
