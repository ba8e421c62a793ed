//! External tool configuration.

use std::path::PathBuf;
use std::time::Duration;

/// External tools and inputs used to build the application bundle.
///
/// # Configuration
///
/// Add to `release.toml`:
///
/// ```toml
/// [tools]
/// packager = "pyinstaller"
/// spec_file = "SkyTouch.spec"
/// installer = "pip3"
/// requirements = "requirements.txt"
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Packaging tool program (name on `PATH` or a path).
    pub packager: String,

    /// Bundle specification passed to the packaging tool.
    ///
    /// Relative to the project directory.
    pub spec_file: PathBuf,

    /// Dependency installer program.
    pub installer: String,

    /// Dependency manifest passed to `installer install -r`.
    ///
    /// Relative to the project directory.
    pub requirements: PathBuf,

    /// Environment variable set while the isolated environment is active.
    pub environment_marker: String,

    /// Intermediate build directory removed before every build.
    pub build_dir: PathBuf,

    /// Output directory of the packaging tool, removed before every build.
    pub dist_dir: PathBuf,

    /// Time budget for a single tool invocation, in seconds.
    pub timeout_secs: u64,
}

impl ToolSettings {
    /// Time budget for a single tool invocation.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            packager: "pyinstaller".into(),
            spec_file: PathBuf::from("SkyTouch.spec"),
            installer: "pip3".into(),
            requirements: PathBuf::from("requirements.txt"),
            environment_marker: "VIRTUAL_ENV".into(),
            build_dir: PathBuf::from("build"),
            dist_dir: PathBuf::from("dist"),
            timeout_secs: 30 * 60,
        }
    }
}
