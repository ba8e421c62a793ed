//! macOS bundle guidance and distribution packaging.

pub mod distribution;
mod guidance;

pub use guidance::{permission_instructions, usage_hints};
