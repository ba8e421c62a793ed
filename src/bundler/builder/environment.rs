//! Isolated dependency environment guard.

use crate::bundler::{Error, Result};

/// Returns the value of `marker` when the isolated environment is active.
///
/// An unset or empty variable means the environment is not active.
pub fn ensure_environment_active(marker: &str) -> Result<String> {
    match std::env::var_os(marker) {
        Some(value) if !value.is_empty() => {
            let value = value.to_string_lossy().into_owned();
            log::debug!("{} = {}", marker, value);
            Ok(value)
        }
        _ => Err(Error::EnvironmentNotActive {
            marker: marker.to_string(),
        }),
    }
}
