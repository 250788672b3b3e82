//! Status and error reporting on stderr
//!
//! stdout is reserved for document output in dry-run mode.

use console::Style;
use miette::Diagnostic;
use std::path::Path;

use crate::error::MaterialError;

/// Writes human-readable progress lines to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Progress detail, shown only in verbose mode
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", Style::new().for_stderr().dim().apply_to(message));
        }
    }

    pub fn success(&self, path: &Path) {
        if !self.quiet {
            eprintln!(
                "{} {}",
                Style::new().for_stderr().green().bold().apply_to("✅ Successfully updated:"),
                path.display()
            );
        }
    }

    pub fn dry_run(&self, path: &Path) {
        if !self.quiet {
            eprintln!(
                "{} Would update: {}",
                Style::new().for_stderr().yellow().bold().apply_to("[DRY RUN]"),
                path.display()
            );
        }
    }

    /// Always shown, even in quiet mode
    pub fn error(&self, err: &MaterialError) {
        let mut lines = error_lines(err).into_iter();
        if let Some(first) = lines.next() {
            eprintln!("{}", Style::new().for_stderr().red().bold().apply_to(first));
        }
        for line in lines {
            eprintln!("{line}");
        }
    }
}

/// Unstyled lines for an error: the message, then the diagnostic help if any
pub fn error_lines(err: &MaterialError) -> Vec<String> {
    let mut lines = vec![format!("Error: {err}")];
    if let Some(help) = err.help() {
        lines.push(help.to_string());
    }
    lines
}
