//! macOS platform-specific settings.

/// macOS code signing configuration.
///
/// # Configuration
///
/// Add to `release.toml`:
///
/// ```toml
/// [macos]
/// codesign = "codesign"
/// signing_identity = "-"
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct MacOsSettings {
    /// Code signing program.
    ///
    /// Default: "codesign"
    pub codesign: String,

    /// Code signing identity name.
    ///
    /// "-" requests an ad-hoc signature (local testing distribution).
    ///
    /// Default: "-"
    pub signing_identity: String,
}

impl MacOsSettings {
    /// Whether the configured identity is the ad-hoc marker.
    pub fn is_ad_hoc(&self) -> bool {
        self.signing_identity == "-"
    }
}

impl Default for MacOsSettings {
    fn default() -> Self {
        Self {
            codesign: "codesign".into(),
            signing_identity: "-".into(),
        }
    }
}
