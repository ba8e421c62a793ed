//! Release tooling for the SkyTouch macOS application.
//!
//! This library provides the release workflows:
//! - Environment-guarded clean builds of the `.app` bundle
//! - Dependency install, build and ad-hoc signing
//! - Distribution archives with generated README and license
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
