//! Build orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the external
//! tools producing and signing the application bundle.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`environment`] - Isolated dependency environment guard
//! - [`orchestrator`] - Main [`Bundler`] struct and build steps
//! - [`signing`] - Ad-hoc code signing
//! - [`tool_detection`] - External tool availability checking

pub(crate) mod checksum;
mod environment;
mod orchestrator;
mod signing;
mod tool_detection;

pub use orchestrator::{BuildMode, BuiltBundle, Bundler};
pub use signing::SigningOutcome;
