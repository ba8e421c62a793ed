//! Building, signing and packaging of the application bundle.
//!
//! - [`builder`] runs the external dependency installer, packaging tool and
//!   signing tool
//! - [`platform::macos::distribution`] assembles the distribution archive
//! - [`settings`] holds the validated release configuration

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::{BuildMode, BuiltBundle, Bundler, SigningOutcome};
pub use error::{Error, Result};
pub use platform::macos::distribution::{DistributionArtifact, package_distribution};
pub use settings::{
    DistributionSettings, MacOsSettings, PackageSettings, Settings, SettingsBuilder, ToolSettings,
};
