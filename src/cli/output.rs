//! Colored terminal output for user feedback.
//!
//! Progress and results go to stdout; warnings and errors go to stderr.

use console::{Term, style};
use std::io;

/// Output manager honoring `--quiet` and `--verbose`.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Prints only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            self.stdout.write_line(&style(message).dim().to_string())?;
        }
        Ok(())
    }

    /// Prints a progress step.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .write_line(&format!("{} {}", style("→").cyan().bold(), message))
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .write_line(&format!("{} {}", style("✓").green().bold(), message))
    }

    /// Prints a warning to stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.stderr
            .write_line(&format!("{} {}", style("⚠").yellow().bold(), message))
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line("")?;
        self.stdout.write_line(&style(title).bold().underlined().to_string())
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(&format!("   {message}"))
    }

    /// Prints a final result line, even in quiet mode.
    pub fn result(&self, message: &str) -> io::Result<()> {
        self.stdout.write_line(message)
    }

    /// Prints one line of external tool output.
    pub fn tool(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(&format!("   {}", style(line).dim()))
    }
}
