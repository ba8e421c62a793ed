//! Core Settings struct and implementations.

use super::{DistributionSettings, MacOsSettings, PackageSettings, ToolSettings};
use std::path::{Path, PathBuf};

/// Main settings for release operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// All relative paths resolve against [`Settings::project_directory`].
///
/// # Examples
///
/// ```no_run
/// use skytouch_release::bundler::SettingsBuilder;
///
/// # fn example() -> skytouch_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory("/work/skytouch")
///     .build()?;
///
/// assert_eq!(settings.package_name(), "SkyTouch-1.0.0-macOS");
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`PackageSettings`] - Package metadata
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// External tools.
    tools: ToolSettings,

    /// macOS signing configuration.
    macos: MacOsSettings,

    /// Distribution archive configuration.
    distribution: DistributionSettings,

    /// Project root all relative paths resolve against.
    project_directory: PathBuf,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the platform tag.
    pub fn platform(&self) -> &str {
        &self.package.platform
    }

    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the external tool settings.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Returns the macOS signing settings.
    pub fn macos(&self) -> &MacOsSettings {
        &self.macos
    }

    /// Returns the distribution settings.
    pub fn distribution(&self) -> &DistributionSettings {
        &self.distribution
    }

    /// Returns the project directory.
    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Returns the intermediate build directory.
    pub fn build_directory(&self) -> PathBuf {
        self.project_directory.join(&self.tools.build_dir)
    }

    /// Returns the packaging tool output directory.
    pub fn dist_directory(&self) -> PathBuf {
        self.project_directory.join(&self.tools.dist_dir)
    }

    /// Returns the bundle specification file.
    pub fn spec_file(&self) -> PathBuf {
        self.project_directory.join(&self.tools.spec_file)
    }

    /// Returns the bundle directory name, e.g. `SkyTouch.app`.
    pub fn bundle_name(&self) -> String {
        format!("{}.app", self.product_name())
    }

    /// Returns the expected location of the packaging tool's bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.dist_directory().join(self.bundle_name())
    }

    /// Returns the distribution name: `<product>-<version>-<platform>`.
    pub fn package_name(&self) -> String {
        format!(
            "{}-{}-{}",
            self.product_name(),
            self.version_string(),
            self.platform()
        )
    }

    /// Returns the directory receiving staging directory and archive.
    pub fn output_directory(&self) -> PathBuf {
        self.project_directory
            .join(&self.distribution.output_directory)
    }

    /// Returns the staging directory for the distribution archive.
    pub fn staging_directory(&self) -> PathBuf {
        self.output_directory().join(self.package_name())
    }

    /// Returns the distribution archive path.
    pub fn archive_path(&self) -> PathBuf {
        self.output_directory()
            .join(format!("{}.zip", self.package_name()))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        tools: ToolSettings,
        macos: MacOsSettings,
        distribution: DistributionSettings,
        project_directory: PathBuf,
    ) -> Self {
        Self {
            package,
            tools,
            macos,
            distribution,
            project_directory,
        }
    }
}
