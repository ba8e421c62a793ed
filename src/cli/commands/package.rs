//! Distribution archive assembly.

use crate::bundler::{Bundler, package_distribution, utils::format_size};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Zips the built bundle with a README and license.
pub async fn execute(bundler: &Bundler, runtime_config: &RuntimeConfig) -> Result<i32> {
    let settings = bundler.settings();
    runtime_config.section(&format!("Packaging {}", settings.package_name()))?;

    runtime_config.progress(&format!(
        "Staging {} with {} and {}...",
        settings.bundle_name(),
        settings.distribution().readme_name,
        settings.distribution().license_name
    ))?;
    let artifact = package_distribution(settings).await?;

    runtime_config.success("Distribution archive created")?;
    runtime_config.result(&format!("Archive: {}", artifact.path.display()))?;
    runtime_config.result(&format!("Size: {}", format_size(artifact.size)))?;
    runtime_config.verbose_println(&format!("SHA-256: {}", artifact.checksum))?;
    if let Some(staging) = &artifact.leftover_staging {
        runtime_config.warn(&format!(
            "Could not remove staging directory {}; delete it by hand",
            staging.display()
        ))?;
    }

    Ok(0)
}
