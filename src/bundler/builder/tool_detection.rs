//! External tool detection and availability checking.
//!
//! Tools are resolved through `which` before they run, so a missing
//! packaging tool is reported up front instead of as a spawn failure.

use crate::bundler::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves a required tool to an executable path.
///
/// Bare names are searched on `PATH`; relative paths resolve against
/// `project_dir`; absolute paths are checked as-is.
pub fn locate_tool(program: &str, project_dir: &Path) -> Result<PathBuf> {
    let candidate = Path::new(program);
    let lookup = if candidate.components().count() > 1 && candidate.is_relative() {
        which::which(project_dir.join(candidate))
    } else {
        which::which(program)
    };

    match lookup {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Ok(path)
        }
        Err(e) => Err(Error::ToolNotFound {
            tool: program.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Resolves an optional tool, logging why it is unavailable.
pub fn probe_tool(program: &str, project_dir: &Path) -> Option<PathBuf> {
    match locate_tool(program, project_dir) {
        Ok(path) => Some(path),
        Err(e) => {
            log::debug!("{} unavailable: {}", program, e);
            None
        }
    }
}
