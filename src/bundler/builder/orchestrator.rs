//! Main build orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that drives the
//! external dependency installer, packaging tool and signing tool.

use super::{
    checksum::calculate_sha256,
    environment::ensure_environment_active,
    signing::{SigningOutcome, sign_bundle},
    tool_detection::locate_tool,
};
use crate::bundler::{
    Error, Result, Settings,
    utils::{
        fs,
        process::{ToolInvocation, run_tool},
    },
};
use std::path::{Path, PathBuf};

/// How the packaging tool treats its caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Pass `--clean` so the tool discards its own caches first.
    Clean,
    /// Let the tool reuse its caches.
    Incremental,
}

/// A bundle produced by the packaging tool.
#[derive(Debug, Clone)]
pub struct BuiltBundle {
    /// Location of the `.app` directory.
    pub path: PathBuf,
    /// SHA-256 over the bundle tree.
    pub checksum: String,
}

/// Build orchestrator.
///
/// Each method is one step of a release workflow; the CLI commands decide
/// the order and which failures are fatal.
///
/// # Examples
///
/// ```no_run
/// use skytouch_release::bundler::{BuildMode, Bundler, SettingsBuilder};
///
/// # async fn example() -> skytouch_release::bundler::Result<()> {
/// let bundler = Bundler::new(SettingsBuilder::new().build()?);
/// bundler.ensure_environment()?;
/// bundler.clean_previous_artifacts().await;
/// let bundle = bundler.build_bundle(BuildMode::Clean, &|line: &str| println!("{line}")).await?;
/// println!("{}", bundle.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fails unless the isolated dependency environment is active.
    pub fn ensure_environment(&self) -> Result<String> {
        ensure_environment_active(&self.settings.tools().environment_marker)
    }

    /// Removes the build and dist directories.
    ///
    /// Best-effort: absence is fine and other failures are only logged.
    /// Returns the directories that are gone afterwards.
    pub async fn clean_previous_artifacts(&self) -> Vec<PathBuf> {
        let mut cleared = Vec::new();
        for dir in [
            self.settings.build_directory(),
            self.settings.dist_directory(),
        ] {
            match fs::remove_dir_all(&dir).await {
                Ok(()) => {
                    log::debug!("Cleared {}", dir.display());
                    cleared.push(dir);
                }
                Err(e) => log::warn!("Could not clear {}: {}", dir.display(), e),
            }
        }
        cleared
    }

    /// Installs dependencies with `<installer> install -r <manifest>`.
    pub async fn install_dependencies<F>(&self, on_line: &F) -> Result<()>
    where
        F: Fn(&str) + Sync,
    {
        let tools = self.settings.tools();
        let program = locate_tool(&tools.installer, self.settings.project_directory())?;

        let invocation = ToolInvocation::new(
            tools.installer.clone(),
            program,
            self.settings.project_directory(),
            tools.timeout(),
        )
        .arg("install")
        .arg("-r")
        .arg(&tools.requirements);

        log::info!("Installing dependencies from {}", tools.requirements.display());
        run_tool(&invocation, on_line).await?.check(&tools.installer)
    }

    /// Runs the packaging tool against the bundle spec file and verifies
    /// that the expected bundle exists afterwards.
    pub async fn build_bundle<F>(&self, mode: BuildMode, on_line: &F) -> Result<BuiltBundle>
    where
        F: Fn(&str) + Sync,
    {
        let tools = self.settings.tools();
        let program = locate_tool(&tools.packager, self.settings.project_directory())?;

        let spec_file = self.settings.spec_file();
        if !spec_file.is_file() {
            return Err(Error::BuildFailed(format!(
                "bundle spec {} not found",
                spec_file.display()
            )));
        }

        let mut invocation = ToolInvocation::new(
            tools.packager.clone(),
            program,
            self.settings.project_directory(),
            tools.timeout(),
        );
        if mode == BuildMode::Clean {
            invocation = invocation.arg("--clean");
        }
        let invocation = invocation.arg(&tools.spec_file);

        log::info!("Packaging {} ({:?})", self.settings.product_name(), mode);
        run_tool(&invocation, on_line).await?.check(&tools.packager)?;

        let path = self.settings.bundle_path();
        verify_bundle(&path)?;

        let checksum = calculate_sha256(&path).await?;
        log::info!("✓ Built {} ({})", path.display(), checksum);

        Ok(BuiltBundle { path, checksum })
    }

    /// Applies the configured signature to `bundle`, best-effort.
    pub async fn sign<F>(&self, bundle: &Path, on_line: &F) -> SigningOutcome
    where
        F: Fn(&str) + Sync,
    {
        sign_bundle(&self.settings, bundle, on_line).await
    }
}

fn verify_bundle(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::BuildFailed(format!(
            "expected bundle {} was not produced",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{SettingsBuilder, ToolSettings};

    fn bundler_in(dir: &Path) -> Bundler {
        Bundler::new(
            SettingsBuilder::new()
                .project_directory(dir)
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn clean_removes_build_and_dist() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("build/SkyTouch")).unwrap();
        std::fs::create_dir_all(temp.path().join("dist/SkyTouch.app")).unwrap();

        let cleared = bundler_in(temp.path()).clean_previous_artifacts().await;

        assert_eq!(cleared.len(), 2);
        assert!(!temp.path().join("build").exists());
        assert!(!temp.path().join("dist").exists());
    }

    #[tokio::test]
    async fn clean_tolerates_missing_directories() {
        let temp = tempfile::tempdir().unwrap();
        let cleared = bundler_in(temp.path()).clean_previous_artifacts().await;
        assert_eq!(cleared.len(), 2);
    }

    #[tokio::test]
    async fn missing_packager_is_reported_before_running() {
        let temp = tempfile::tempdir().unwrap();
        let bundler = Bundler::new(
            SettingsBuilder::new()
                .project_directory(temp.path())
                .tool_settings(ToolSettings {
                    packager: "skytouch-no-such-packager".into(),
                    ..Default::default()
                })
                .build()
                .unwrap(),
        );

        let err = bundler
            .build_bundle(BuildMode::Clean, &|_: &str| {})
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn packager_failure_keeps_its_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("SkyTouch.spec"), "# spec\n").unwrap();
        let script = temp.path().join("pyinstaller");
        std::fs::write(
            &script,
            "#!/bin/sh\necho collecting >&2\necho \"No module named 'cv2'\" >&2\nexit 2\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let bundler = Bundler::new(
            SettingsBuilder::new()
                .project_directory(temp.path())
                .tool_settings(ToolSettings {
                    packager: script.display().to_string(),
                    ..Default::default()
                })
                .build()
                .unwrap(),
        );

        let err = bundler
            .build_bundle(BuildMode::Clean, &|_: &str| {})
            .await
            .unwrap_err();
        match err {
            Error::ToolFailed { stderr_tail, .. } => assert_eq!(
                stderr_tail,
                vec!["collecting".to_string(), "No module named 'cv2'".to_string()]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn verify_bundle_requires_directory() {
        let temp = tempfile::tempdir().unwrap();
        let err = verify_bundle(&temp.path().join("SkyTouch.app")).unwrap_err();
        assert!(matches!(err, Error::BuildFailed(_)));
        assert!(verify_bundle(temp.path()).is_ok());
    }
}
