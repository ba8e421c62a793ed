//! Distribution archive for the macOS application bundle.
//!
//! # Process
//! 1. Require the built `.app` bundle
//! 2. Remove any staging directory and archive of the same name
//! 3. Create the staging directory `<product>-<version>-<platform>/`
//! 4. Copy the bundle in and write README and license
//! 5. Zip the staging directory into `<product>-<version>-<platform>.zip`
//! 6. Remove the staging directory, leaving only the archive
//!
//! # Module Organization
//! - `documents` - README and license rendering
//! - `archive` - Deterministic zip creation

mod archive;
mod documents;

use crate::bundler::{
    Error, Result,
    builder::checksum::calculate_sha256,
    error::ErrorExt,
    settings::Settings,
    utils::fs,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

pub use archive::zip_directory;
pub use documents::{render_license, render_readme};

/// A finished distribution archive.
#[derive(Debug, Clone)]
pub struct DistributionArtifact {
    /// Absolute path of the archive.
    pub path: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
    /// Staging directory that could not be removed after compression.
    pub leftover_staging: Option<PathBuf>,
}

/// Assembles the distribution archive from the built bundle.
///
/// Nothing is created when the bundle is missing. If any step after the
/// staging directory exists fails, the staging directory and any partial
/// archive are removed before the error is returned. Once the archive is
/// complete, a staging directory that cannot be removed is reported in
/// [`DistributionArtifact::leftover_staging`] instead.
///
/// # Example
/// ```no_run
/// # use skytouch_release::bundler::{SettingsBuilder, package_distribution};
/// # async fn example() -> skytouch_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let artifact = package_distribution(&settings).await?;
/// println!("{} ({} bytes)", artifact.path.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
pub async fn package_distribution(settings: &Settings) -> Result<DistributionArtifact> {
    let bundle = settings.bundle_path();
    if !bundle.is_dir() {
        return Err(Error::BundleMissing { path: bundle });
    }

    let staging = settings.staging_directory();
    let archive = settings.archive_path();
    log::info!("Packaging {} from {}", settings.package_name(), bundle.display());

    fs::remove_dir_all(&staging).await?;
    fs::remove_file(&archive).await?;

    if let Err(e) = assemble(settings, &bundle, &staging, &archive).await {
        discard_partial(&staging, &archive).await;
        return Err(e);
    }

    let leftover_staging = if remove_staging(&staging).await {
        None
    } else {
        Some(staging)
    };

    let size = tokio::fs::metadata(&archive)
        .await
        .fs_context("reading archive metadata", &archive)?
        .len();
    let checksum = calculate_sha256(&archive).await?;
    let path = archive
        .absolutize()
        .fs_context("resolving archive path", &archive)?
        .into_owned();

    log::info!("✓ Created {} ({} bytes)", path.display(), size);

    Ok(DistributionArtifact {
        path,
        size,
        checksum,
        leftover_staging,
    })
}

async fn remove_staging(staging: &Path) -> bool {
    match fs::remove_dir_all(staging).await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Archive complete, staging directory left behind: {}", e);
            false
        }
    }
}

async fn assemble(settings: &Settings, bundle: &Path, staging: &Path, archive: &Path) -> Result<()> {
    fs::create_dir_all(staging, false).await?;

    let staged_bundle = staging.join(settings.bundle_name());
    log::debug!("Copying bundle to staging: {}", staged_bundle.display());
    fs::copy_dir(bundle, &staged_bundle).await?;

    let distribution = settings.distribution();
    fs::write_file(
        &staging.join(&distribution.readme_name),
        &render_readme(settings)?,
    )
    .await?;
    fs::write_file(
        &staging.join(&distribution.license_name),
        &render_license(settings)?,
    )
    .await?;

    zip_directory(staging, archive).await
}

async fn discard_partial(staging: &Path, archive: &Path) {
    for result in [
        fs::remove_dir_all(staging).await,
        fs::remove_file(archive).await,
    ] {
        if let Err(e) = result {
            log::warn!("Cleanup after failed packaging: {}", e);
        }
    }
}
