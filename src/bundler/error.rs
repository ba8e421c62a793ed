//! Error types for bundling, signing and distribution packaging.

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error as DeriveError;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the bundler.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// The isolated dependency environment is not active.
    #[error("isolated environment is not active ({marker} is not set)")]
    EnvironmentNotActive {
        /// Environment variable that marks an active environment.
        marker: String,
    },

    /// The application bundle produced by the packaging tool is missing.
    #[error("application bundle not found: {}", path.display())]
    BundleMissing {
        /// Expected bundle location.
        path: PathBuf,
    },

    /// An external tool could not be located.
    #[error("`{tool}` was not found: {reason}")]
    ToolNotFound {
        /// Program name or path as configured.
        tool: String,
        /// Lookup failure.
        reason: String,
    },

    /// An external tool exited unsuccessfully.
    #[error("`{tool}` failed with {status}")]
    ToolFailed {
        /// Program that failed.
        tool: String,
        /// Exit status description.
        status: String,
        /// Last lines the tool wrote to stderr.
        stderr_tail: Vec<String>,
    },

    /// An external tool exceeded its time budget and was killed.
    #[error("`{tool}` timed out after {timeout:?}")]
    ToolTimedOut {
        /// Program that timed out.
        tool: String,
        /// Time budget that was exceeded.
        timeout: Duration,
    },

    /// The packaging tool ran but did not produce a usable bundle.
    #[error("build failed: {0}")]
    BuildFailed(String),

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Filesystem operation failed.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        error: io::Error,
    },

    /// Zip archive error.
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    /// Template rendering error.
    #[error("{0}")]
    Template(#[from] handlebars::RenderError),

    /// Directory traversal error.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping error.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// IO error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Generic error.
    #[error("{0}")]
    GenericError(String),
}

/// Convenient early return with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::Error::GenericError($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

/// Attach a filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error with the operation and path it concerns.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let err: Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            .fs_context("removing directory", "/tmp/dist");

        let message = err.unwrap_err().to_string();
        assert_eq!(message, "removing directory /tmp/dist: denied");
    }

    #[test]
    fn timeout_reports_exact_budget() {
        let short = Error::ToolTimedOut {
            tool: "pyinstaller".into(),
            timeout: Duration::from_millis(200),
        };
        assert_eq!(short.to_string(), "`pyinstaller` timed out after 200ms");

        let default = Error::ToolTimedOut {
            tool: "pyinstaller".into(),
            timeout: Duration::from_secs(30 * 60),
        };
        assert_eq!(default.to_string(), "`pyinstaller` timed out after 1800s");
    }

    #[test]
    fn bail_formats_message() {
        fn failing(name: &str) -> Result<()> {
            crate::bail!("unsupported platform {}", name);
        }

        let err = failing("plan9").unwrap_err();
        assert_eq!(err.to_string(), "unsupported platform plan9");
    }
}
