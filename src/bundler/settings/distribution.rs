//! Distribution archive settings.

use std::path::PathBuf;

/// Where and how the distribution archive is assembled.
///
/// # Configuration
///
/// ```toml
/// [distribution]
/// output_directory = "."
/// readme_name = "README.txt"
/// license_name = "LICENSE"
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct DistributionSettings {
    /// Directory receiving the staging directory and the archive.
    ///
    /// Relative to the project directory.
    pub output_directory: PathBuf,

    /// File name of the generated README inside the archive.
    pub readme_name: String,

    /// File name of the generated license inside the archive.
    pub license_name: String,
}

impl Default for DistributionSettings {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            readme_name: "README.txt".into(),
            license_name: "LICENSE".into(),
        }
    }
}
