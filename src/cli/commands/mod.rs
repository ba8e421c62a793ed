//! Command execution functions for the release workflows.
//!
//! Each workflow is a standalone entry point; they share nothing but the
//! project directory on disk.

mod build;
mod install_build;
mod package;

pub use build::execute as build;
pub use install_build::execute as install_build;
pub use package::execute as package;
