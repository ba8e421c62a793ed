//! Environment guard followed by a clean bundle build.

use crate::bundler::{BuildMode, Bundler, platform::macos::usage_hints};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Builds the bundle from scratch inside the active virtual environment.
///
/// Fails before touching the filesystem when the environment marker is
/// missing.
pub async fn execute(bundler: &Bundler, runtime_config: &RuntimeConfig) -> Result<i32> {
    let settings = bundler.settings();
    runtime_config.section(&format!("Building {}", settings.product_name()))?;

    let environment = bundler.ensure_environment()?;
    runtime_config.success(&format!("Virtual environment active: {environment}"))?;

    runtime_config.progress("Removing previous build artifacts...")?;
    for dir in bundler.clean_previous_artifacts().await {
        runtime_config.verbose_println(&format!("   cleared {}", dir.display()))?;
    }

    runtime_config.progress(&format!(
        "Running {} --clean {}",
        settings.tools().packager,
        settings.tools().spec_file.display()
    ))?;
    let bundle = bundler
        .build_bundle(BuildMode::Clean, &|line: &str| runtime_config.tool_line(line))
        .await?;

    runtime_config.success("Build succeeded")?;
    runtime_config.result(&format!("Bundle: {}", bundle.path.display()))?;
    runtime_config.verbose_println(&format!("Bundle SHA-256: {}", bundle.checksum))?;
    for hint in usage_hints(settings) {
        runtime_config.indent(&hint)?;
    }

    Ok(0)
}
