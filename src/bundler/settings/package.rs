//! Package metadata and configuration.

/// Package metadata and configuration.
///
/// Contains the product identity used to name the bundle, the distribution
/// archive, and the generated README and license.
///
/// # Examples
///
/// ```no_run
/// use skytouch_release::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "SkyTouch".into(),
///     version: "1.0.1".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PackageSettings {
    /// Product name displayed to users.
    ///
    /// Also the stem of the bundle directory (`SkyTouch.app`).
    pub product_name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.0.0", "0.2.3-beta.1"
    pub version: String,

    /// Platform tag appended to the distribution name.
    ///
    /// Example: "macOS"
    pub platform: String,

    /// Brief description of the application.
    ///
    /// Used as the README subtitle.
    pub description: String,

    /// Copyright holder named in the license.
    pub copyright_holder: String,

    /// Copyright year named in the license.
    pub license_year: u16,

    /// Minimum macOS version listed under README requirements.
    pub minimum_system_version: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "SkyTouch".into(),
            version: "1.0.0".into(),
            platform: "macOS".into(),
            description: "Control your Mac with hand gestures using your webcam.".into(),
            copyright_holder: "SkyTouch Team".into(),
            license_year: 2024,
            minimum_system_version: "10.15".into(),
        }
    }
}
