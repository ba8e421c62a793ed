//! Configuration structures for release operations.
//!
//! This module provides the configuration types for building, signing and
//! packaging the application bundle, including package metadata, external
//! tool settings, and a builder for constructing validated settings.

mod builder;
mod core;
mod distribution;
mod macos;
mod package;
mod tools;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use distribution::DistributionSettings;
pub use macos::MacOsSettings;
pub use package::PackageSettings;
pub use tools::ToolSettings;
