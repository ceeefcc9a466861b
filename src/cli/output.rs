//! Terminal output formatting
//!
//! Report lines stay plain so they can be piped and diffed; colors are
//! reserved for stderr decoration. Respects NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::{Diagnostic, DiagnosticSink};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print plain output (no color, for data/report lines)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Sink that prints each diagnostic's report line to stdout as it arrives.
#[derive(Debug, Default)]
pub struct ReportSink {
    violations: usize,
    checked: usize,
}

impl ReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn violations(&self) -> usize {
        self.violations
    }
}

impl DiagnosticSink for ReportSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.checked += 1;
        if diagnostic.is_violation() {
            self.violations += 1;
        }
        info(&diagnostic);
    }
}
