//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release tooling for the SkyTouch macOS application
#[derive(Parser, Debug)]
#[command(
    name = "skytouch_release",
    version,
    about = "Builds, signs and packages the SkyTouch macOS application",
    long_about = "Builds, signs and packages the SkyTouch macOS application.

Usage:
  skytouch_release build          # inside an active virtual environment
  skytouch_release install-build  # install requirements, build, sign ad-hoc
  skytouch_release package        # zip dist/SkyTouch.app for distribution

Exit code 0 = the requested artifact exists."
)]
pub struct Args {
    /// Workflow to run
    #[command(subcommand)]
    pub command: Command,

    /// Project directory containing the bundle spec and requirements
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        default_value = ".",
        env = "SKYTOUCH_PROJECT_DIR",
        global = true
    )]
    pub project_dir: PathBuf,

    /// Release configuration file (default: <DIR>/release.toml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Only print errors and the final result
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print every step, including tool command lines
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Release workflows
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Verify the virtual environment is active and build the bundle from scratch
    Build,
    /// Install requirements, build the bundle and apply an ad-hoc signature
    InstallBuild,
    /// Zip the built bundle with a README and license for distribution
    Package,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.project_dir.as_os_str().is_empty() {
            return Err("Project directory cannot be empty".to_string());
        }
        if self
            .config
            .as_ref()
            .is_some_and(|config| config.as_os_str().is_empty())
        {
            return Err("Config path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print a line that survives `--quiet`
    pub fn result(&self, message: &str) -> std::io::Result<()> {
        self.output.result(message)
    }

    /// Forward one line of external tool output
    pub fn tool_line(&self, line: &str) {
        // Decorative: a closed stdout must not abort the build.
        let _ = self.output.tool(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_subcommands_with_global_options() {
        let args = Args::try_parse_from(["skytouch_release", "package", "-C", "/work", "-q"]).unwrap();
        assert_eq!(args.command, Command::Package);
        assert_eq!(args.project_dir, PathBuf::from("/work"));
        assert!(args.quiet);
        assert!(args.validate().is_ok());

        let args = Args::try_parse_from(["skytouch_release", "install-build"]).unwrap();
        assert_eq!(args.command, Command::InstallBuild);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["skytouch_release", "build", "-q", "-v"]).is_err());
    }

    #[test]
    fn commands_take_no_arguments() {
        assert!(Args::try_parse_from(["skytouch_release", "build", "extra"]).is_err());
    }
}
