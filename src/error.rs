//! Error types for the release tool.
//!
//! This module defines the top-level error with actionable recovery
//! suggestions for the operator.

use thiserror::Error;

/// Result type alias for release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Configuration file could not be read
    #[error("Cannot read config {path}: {reason}")]
    ConfigUnreadable {
        /// Config file path
        path: String,
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as B;

        match self {
            Self::Bundler(B::EnvironmentNotActive { marker }) => vec![
                "Activate the virtual environment first:".to_string(),
                "  source venv/bin/activate".to_string(),
                format!("({marker} must be set)"),
            ],
            Self::Bundler(B::BundleMissing { .. }) => vec![
                "Build the application bundle first:".to_string(),
                "  skytouch_release build".to_string(),
            ],
            Self::Bundler(B::ToolNotFound { tool, .. }) => vec![format!(
                "Install `{tool}` or point release.toml [tools] at it"
            )],
            Self::Bundler(B::ToolFailed { stderr_tail, .. }) if !stderr_tail.is_empty() => {
                let mut lines = vec!["Last tool output:".to_string()];
                lines.extend(stderr_tail.iter().map(|l| format!("  {l}")));
                lines
            }
            Self::Bundler(B::BuildFailed(_)) => {
                vec!["Check the packaging tool output above for details".to_string()]
            }
            Self::Bundler(B::InvalidSettings(_)) | Self::Toml(_) => {
                vec!["Fix release.toml and try again".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
