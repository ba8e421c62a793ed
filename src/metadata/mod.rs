//! Release configuration discovery from `release.toml`.

use crate::bundler::{
    DistributionSettings, MacOsSettings, PackageSettings, Settings, SettingsBuilder, ToolSettings,
};
use crate::error::{CliError, ReleaseError, Result};
use std::path::{Path, PathBuf};

/// File looked up in the project directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "release.toml";

/// Contents of `release.toml`; every section is optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// `[package]` section
    pub package: PackageSettings,
    /// `[tools]` section
    pub tools: ToolSettings,
    /// `[macos]` section
    pub macos: MacOsSettings,
    /// `[distribution]` section
    pub distribution: DistributionSettings,
}

/// Parses release configuration from TOML text.
pub fn parse_config(text: &str) -> Result<ReleaseConfig> {
    Ok(toml::from_str(text)?)
}

/// Reads and parses a release configuration file.
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ReleaseError::Cli(CliError::ConfigUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    parse_config(&text)
}

/// Resolves settings for `project_dir`.
///
/// An explicit `config` must exist. Without one, `release.toml` in the
/// project directory is used when present, otherwise built-in defaults.
pub fn resolve_settings(project_dir: &Path, config: Option<&Path>) -> Result<Settings> {
    if !project_dir.is_dir() {
        return Err(ReleaseError::Cli(CliError::InvalidArguments {
            reason: format!("Project directory does not exist: {}", project_dir.display()),
        }));
    }

    let config_path: Option<PathBuf> = match config {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    };

    let release_config = match &config_path {
        Some(path) => {
            log::info!("Loading release configuration from {}", path.display());
            load_config(path)?
        }
        None => {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            ReleaseConfig::default()
        }
    };

    let settings = SettingsBuilder::new()
        .project_directory(project_dir)
        .package_settings(release_config.package)
        .tool_settings(release_config.tools)
        .macos_settings(release_config.macos)
        .distribution_settings(release_config.distribution)
        .build()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.package.product_name, "SkyTouch");
        assert_eq!(config.package.version, "1.0.0");
        assert_eq!(config.tools.packager, "pyinstaller");
        assert_eq!(config.tools.environment_marker, "VIRTUAL_ENV");
        assert_eq!(config.macos.signing_identity, "-");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"
            [package]
            version = "1.2.0"

            [tools]
            packager = "/opt/bin/pyinstaller"
            "#,
        )
        .unwrap();

        assert_eq!(config.package.version, "1.2.0");
        assert_eq!(config.package.platform, "macOS");
        assert_eq!(config.tools.packager, "/opt/bin/pyinstaller");
        assert_eq!(config.tools.spec_file, PathBuf::from("SkyTouch.spec"));
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let err = parse_config("[signing]\nnotarize = true\n").unwrap_err();
        assert!(matches!(err, ReleaseError::Toml(_)));
    }

    #[test]
    fn resolve_prefers_project_release_toml() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[package]\nversion = \"2.0.0\"\n",
        )
        .unwrap();

        let settings = resolve_settings(temp.path(), None).unwrap();
        assert_eq!(settings.package_name(), "SkyTouch-2.0.0-macOS");
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = tempfile::tempdir().unwrap();
        let err = resolve_settings(temp.path(), Some(&temp.path().join("missing.toml")))
            .unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Cli(CliError::ConfigUnreadable { .. })
        ));
    }

    #[test]
    fn invalid_version_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[package]\nversion = \"one\"\n",
        )
        .unwrap();

        let err = resolve_settings(temp.path(), None).unwrap_err();
        assert!(err.to_string().contains("not semver"));
    }
}
