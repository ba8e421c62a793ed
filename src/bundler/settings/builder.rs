//! Builder for constructing Settings.

use super::{DistributionSettings, MacOsSettings, PackageSettings, Settings, ToolSettings};
use crate::bundler::Error;
use std::path::{Component, Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every section falls back to its SkyTouch default when not provided.
///
/// # Examples
///
/// ```no_run
/// use skytouch_release::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> skytouch_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory(".")
///     .package_settings(PackageSettings {
///         version: "1.1.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_directory: Option<PathBuf>,
    package_settings: PackageSettings,
    tool_settings: ToolSettings,
    macos_settings: MacOsSettings,
    distribution_settings: DistributionSettings,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// Default: the current directory
    pub fn project_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets external tool configuration.
    pub fn tool_settings(mut self, settings: ToolSettings) -> Self {
        self.tool_settings = settings;
        self
    }

    /// Sets macOS signing configuration.
    pub fn macos_settings(mut self, settings: MacOsSettings) -> Self {
        self.macos_settings = settings;
        self
    }

    /// Sets distribution archive configuration.
    pub fn distribution_settings(mut self, settings: DistributionSettings) -> Self {
        self.distribution_settings = settings;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if the version is not a semantic
    /// version, or if a name that ends up in a file name is empty or
    /// contains a path separator, or if a work directory that gets removed
    /// before each build is not a plain relative path inside the project.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let package = self.package_settings;

        semver::Version::parse(&package.version).map_err(|e| {
            Error::InvalidSettings(format!("version `{}` is not semver: {}", package.version, e))
        })?;

        validate_file_component("product_name", &package.product_name)?;
        validate_file_component("platform", &package.platform)?;
        validate_file_component("readme_name", &self.distribution_settings.readme_name)?;
        validate_file_component("license_name", &self.distribution_settings.license_name)?;

        validate_work_dir("tools.build_dir", &self.tool_settings.build_dir)?;
        validate_work_dir("tools.dist_dir", &self.tool_settings.dist_dir)?;

        if self.tool_settings.timeout_secs == 0 {
            return Err(Error::InvalidSettings(
                "tools.timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(Settings::new(
            package,
            self.tool_settings,
            self.macos_settings,
            self.distribution_settings,
            self.project_directory.unwrap_or_else(|| PathBuf::from(".")),
        ))
    }
}

fn validate_file_component(field: &str, value: &str) -> crate::bundler::Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidSettings(format!("{field} must not be empty")));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(Error::InvalidSettings(format!(
            "{field} `{value}` must be a plain file name"
        )));
    }
    Ok(())
}

/// Work directories are deleted recursively, so they must stay below the
/// project directory: relative, non-empty, no `.` or `..` components.
fn validate_work_dir(field: &str, dir: &Path) -> crate::bundler::Result<()> {
    let mut components = dir.components().peekable();
    if components.peek().is_none() {
        return Err(Error::InvalidSettings(format!("{field} must not be empty")));
    }
    if components.all(|c| matches!(c, Component::Normal(_))) {
        Ok(())
    } else {
        Err(Error::InvalidSettings(format!(
            "{field} `{}` must be a relative path inside the project",
            dir.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_semver_version() {
        let err = SettingsBuilder::new()
            .package_settings(PackageSettings {
                version: "1.0".into(),
                ..Default::default()
            })
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(err.to_string().contains("1.0"));
    }

    #[test]
    fn rejects_product_name_with_separator() {
        let err = SettingsBuilder::new()
            .package_settings(PackageSettings {
                product_name: "../SkyTouch".into(),
                ..Default::default()
            })
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("product_name"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = SettingsBuilder::new()
            .tool_settings(ToolSettings {
                timeout_secs: 0,
                ..Default::default()
            })
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn rejects_work_dirs_outside_the_project() {
        for dir in ["", ".", "..", "/tmp", "dist/../..", "./dist"] {
            let err = SettingsBuilder::new()
                .tool_settings(ToolSettings {
                    dist_dir: PathBuf::from(dir),
                    ..Default::default()
                })
                .build()
                .unwrap_err();
            assert!(err.to_string().contains("tools.dist_dir"), "{dir:?}: {err}");
        }

        let err = SettingsBuilder::new()
            .tool_settings(ToolSettings {
                build_dir: PathBuf::from(".."),
                ..Default::default()
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("tools.build_dir"));
    }

    #[test]
    fn accepts_nested_work_dirs() {
        let settings = SettingsBuilder::new()
            .project_directory("/work/skytouch")
            .tool_settings(ToolSettings {
                build_dir: PathBuf::from("out/build"),
                dist_dir: PathBuf::from("out/dist"),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(
            settings.dist_directory(),
            Path::new("/work/skytouch/out/dist")
        );
    }

    #[test]
    fn defaults_to_current_directory() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.project_directory(), Path::new("."));
        assert!(settings.macos().is_ad_hoc());
    }
}
