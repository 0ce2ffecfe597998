//! Colored terminal output utilities.

use std::fmt::Display;

use console::{Style, Term};

/// Styled stderr output.
pub(crate) struct Output {
    term: Term,
    dim: Style,
    green: Style,
    red: Style,
    heading: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            dim: Style::new().dim(),
            green: Style::new().green(),
            red: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Print a plain line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a `label: value` line with a dimmed label.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let label = format!("{label}:");
        let _ = self
            .term
            .write_line(&format!("{} {value}", self.dim.apply_to(format!("{label:<10}"))));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a heading underlined to its width.
    pub(crate) fn heading(&self, title: &str) {
        let _ = self
            .term
            .write_line(&self.heading.apply_to(title).to_string());
        let _ = self
            .term
            .write_line(&self.dim.apply_to("-".repeat(title.len().max(3))).to_string());
    }
}
