//! Core utilities and types for the Alfred provider generator.
//!
//! This crate provides the file persistence layer and small name helpers
//! shared by every other crate in the workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// Name utilities
pub use utils::{package_dir, qualify, simple_name};
