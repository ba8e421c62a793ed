//! Command line interface for the release tool.
//!
//! This module provides the CLI for the release workflows, with argument
//! parsing, configuration loading, command dispatch and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{Bundler, Settings};
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    let settings = crate::metadata::resolve_settings(&args.project_dir, args.config.as_deref())?;
    runtime_config.verbose_println(&format!(
        "Project: {} ({})",
        settings.project_directory().display(),
        settings.package_name()
    ))?;

    execute(args.command, settings, &runtime_config).await
}

/// Runs one workflow with resolved settings.
pub async fn execute(
    command: Command,
    settings: Settings,
    runtime_config: &RuntimeConfig,
) -> Result<i32> {
    let bundler = Bundler::new(settings);
    match command {
        Command::Build => commands::build(&bundler, runtime_config).await,
        Command::InstallBuild => commands::install_build(&bundler, runtime_config).await,
        Command::Package => commands::package(&bundler, runtime_config).await,
    }
}
