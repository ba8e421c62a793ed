//! Shared fixtures for CLI tests: a throwaway project directory with fake
//! external tools written as shell scripts.

#![allow(dead_code)]

use assert_cmd::Command;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Packaging tool that records its arguments and produces the bundle.
pub const FAKE_PACKAGER: &str = r#"#!/bin/sh
echo "$@" > packager-args.txt
echo "Building SkyTouch"
mkdir -p build/SkyTouch dist/SkyTouch.app/Contents/MacOS
printf 'binary' > dist/SkyTouch.app/Contents/MacOS/SkyTouch
chmod 755 dist/SkyTouch.app/Contents/MacOS/SkyTouch
printf '<plist/>' > dist/SkyTouch.app/Contents/Info.plist
"#;

/// Packaging tool that fails without producing anything.
pub const FAILING_PACKAGER: &str = r#"#!/bin/sh
echo "$@" > packager-args.txt
echo "ModuleNotFoundError: No module named 'cv2'" >&2
exit 2
"#;

/// Packaging tool that succeeds but never writes the bundle.
pub const SILENT_PACKAGER: &str = r#"#!/bin/sh
echo "$@" > packager-args.txt
mkdir -p dist
"#;

/// Dependency installer that records its arguments.
pub const FAKE_INSTALLER: &str = r#"#!/bin/sh
echo "$@" > installer-args.txt
echo "Successfully installed opencv-python mediapipe"
"#;

/// Dependency installer that fails.
pub const FAILING_INSTALLER: &str = r#"#!/bin/sh
echo "ERROR: Could not find a version that satisfies the requirement mediapipe==0.0" >&2
exit 1
"#;

/// Signing tool that records its arguments.
pub const FAKE_CODESIGN: &str = r#"#!/bin/sh
echo "$@" > codesign-args.txt
"#;

/// A temporary SkyTouch project.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Creates a project with a spec file and requirements manifest.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project");
        std::fs::write(dir.path().join("SkyTouch.spec"), "# spec\n").unwrap();
        std::fs::write(
            dir.path().join("requirements.txt"),
            "opencv-python\nmediapipe\nPyQt5\npyautogui\n",
        )
        .unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Writes an executable script under `tools/` and returns its path.
    pub fn tool(&self, name: &str, script: &str) -> PathBuf {
        let tools = self.join("tools");
        std::fs::create_dir_all(&tools).unwrap();
        let path = tools.join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Writes `release.toml` pointing the tools at the given scripts.
    pub fn configure(&self, packager: &Path, installer: &Path, codesign: &str, extra: &str) {
        let config = format!(
            "[tools]\npackager = '{}'\ninstaller = '{}'\n\n[macos]\ncodesign = '{}'\n\n{}",
            packager.display(),
            installer.display(),
            codesign,
            extra
        );
        std::fs::write(self.join("release.toml"), config).unwrap();
    }

    /// Configures working fake tools for every workflow.
    pub fn with_working_tools(&self) -> &Self {
        let packager = self.tool("pyinstaller", FAKE_PACKAGER);
        let installer = self.tool("pip3", FAKE_INSTALLER);
        let codesign = self.tool("codesign", FAKE_CODESIGN);
        self.configure(&packager, &installer, &codesign.display().to_string(), "");
        self
    }

    /// Creates `dist/SkyTouch.app` as if a build had run.
    pub fn with_bundle(&self) -> &Self {
        let macos = self.join("dist/SkyTouch.app/Contents/MacOS");
        std::fs::create_dir_all(&macos).unwrap();
        std::fs::write(macos.join("SkyTouch"), "binary").unwrap();
        std::fs::write(self.join("dist/SkyTouch.app/Contents/Info.plist"), "<plist/>").unwrap();
        self
    }

    /// Reads a file written by a fake tool.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).unwrap()
    }

    /// The release binary, run against this project with no active
    /// virtual environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skytouch_release").unwrap();
        cmd.current_dir(self.path())
            .env_remove("VIRTUAL_ENV")
            .env_remove("SKYTOUCH_PROJECT_DIR")
            .env_remove("RUST_LOG")
            .arg("-C")
            .arg(self.path());
        cmd
    }
}
