//! Console output helpers.

use owo_colors::OwoColorize;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn status(&self, message: &str) {
        println!("{message}");
    }

    pub fn info(&self, label: &str, message: &str) {
        println!("{} {}", label.bright_cyan(), message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".bright_green(), message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", "!".bright_yellow(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".bright_red(), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
