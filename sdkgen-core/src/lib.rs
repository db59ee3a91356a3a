//! Core utilities and types for the sdkgen SDK generator.
//!
//! This crate provides the file-writing and casing helpers shared by the
//! generator crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{split_words, to_camel_case, to_screaming_snake_case, to_snake_case};
