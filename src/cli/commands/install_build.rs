//! Dependency install, bundle build and ad-hoc signing.

use crate::bundler::{
    BuildMode, Bundler, SigningOutcome, platform::macos::permission_instructions,
};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Installs requirements, builds the bundle, signs it and prints the
/// permission setup the operator has to do by hand.
///
/// Install and build failures abort the run. Signing is best-effort; its
/// outcome only changes the completion message.
pub async fn execute(bundler: &Bundler, runtime_config: &RuntimeConfig) -> Result<i32> {
    let settings = bundler.settings();
    let tools = settings.tools();
    let forward = |line: &str| runtime_config.tool_line(line);

    runtime_config.section(&format!("Building {}", settings.product_name()))?;

    runtime_config.progress(&format!(
        "Installing dependencies from {}...",
        tools.requirements.display()
    ))?;
    bundler.install_dependencies(&forward).await?;
    runtime_config.success("Dependencies installed")?;

    runtime_config.progress("Removing previous build artifacts...")?;
    for dir in bundler.clean_previous_artifacts().await {
        runtime_config.verbose_println(&format!("   cleared {}", dir.display()))?;
    }

    runtime_config.progress(&format!(
        "Running {} {}",
        tools.packager,
        tools.spec_file.display()
    ))?;
    let bundle = bundler
        .build_bundle(BuildMode::Incremental, &forward)
        .await?;
    runtime_config.success(&format!("Built {}", bundle.path.display()))?;

    runtime_config.progress("Applying ad-hoc signature...")?;
    let signing = bundler.sign(&bundle.path, &forward).await;
    match &signing {
        SigningOutcome::Signed { .. } if settings.macos().is_ad_hoc() => {
            runtime_config.success("Signed ad-hoc")?
        }
        SigningOutcome::Signed { identity } => {
            runtime_config.success(&format!("Signed with identity {identity}"))?
        }
        SigningOutcome::Skipped { reason } => {
            runtime_config.warn(&format!("Signing skipped: {reason}"))?
        }
        SigningOutcome::Failed { reason } => {
            runtime_config.warn(&format!("Signing failed: {reason}"))?
        }
    }

    let state = if signing.is_signed() { "signed" } else { "unsigned" };
    runtime_config.result(&format!(
        "Build completed ({state}): {}",
        bundle.path.display()
    ))?;

    runtime_config.section("Required permissions")?;
    for line in permission_instructions(settings) {
        runtime_config.indent(&line)?;
    }

    Ok(0)
}
