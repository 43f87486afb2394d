//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
/// Machine-readable results go to stdout, status messages to stderr.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a table heading
    pub fn section(&self, title: &str) {
        println!("{}", title.bold());
    }

    /// Print one symbolic-to-native row
    pub fn mapping(&self, symbolic: &str, native: i32, note: Option<&str>) {
        println!("{}", self.format_mapping(symbolic, native, note));
    }

    /// Format one symbolic-to-native row
    pub fn format_mapping(&self, symbolic: &str, native: i32, note: Option<&str>) -> String {
        match note {
            Some(note) => format!("  {:<22} {:>3}  {}", symbolic, native, note.dimmed()),
            None => format!("  {:<22} {:>3}", symbolic, native),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
