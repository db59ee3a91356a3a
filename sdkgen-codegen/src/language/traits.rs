//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::generation::WriteStats;

/// Trait for SDK emitters.
///
/// Emitters are pure functions of the IR: `preview` twice yields the same
/// files byte for byte.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript", "javascript", "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts", "js", "rs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub language: &'static str,
    pub stats: WriteStats,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    pub content: String,
}
