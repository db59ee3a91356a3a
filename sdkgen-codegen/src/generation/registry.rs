//! File registration for declarative code generation.
//!
//! Emitters register every file they produce, then preview or write the
//! whole set at once:
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("routes.ts", routes));
//! registry.register(FileEntry::new("sdk.ts", sdk));
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use sdkgen_core::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
use tracing::debug;

use crate::language::PreviewFile;

/// A file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
    pub overwrite: Overwrite,
}

impl FileEntry {
    /// Create an entry that is skipped when the file on disk is identical.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::IfChanged,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Create an entry from a [`GeneratedFile`], respecting its rules.
    pub fn from_generated<F: GeneratedFile>(file: &F) -> Self {
        Self {
            path: file.path(Path::new("")).to_string_lossy().into_owned(),
            content: file.render(),
            overwrite: file.rules().overwrite,
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file to disk.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str())
            .with_rules(FileRules {
                overwrite: self.overwrite,
            })
            .write()
    }
}

/// Registry for collecting generated files, kept in registration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries
            .iter()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files to the output directory.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in &self.entries {
            let result = entry.write(base)?;
            debug!(path = %entry.path, ?result, "wrote generated file");
            match result {
                WriteResult::Written => stats.written_paths.push(entry.path.clone()),
                WriteResult::Unchanged => stats.unchanged_paths.push(entry.path.clone()),
            }
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    pub written_paths: Vec<String>,
    /// Files left alone because their content was already identical.
    pub unchanged_paths: Vec<String>,
}

impl WriteStats {
    pub fn written(&self) -> usize {
        self.written_paths.len()
    }

    pub fn unchanged(&self) -> usize {
        self.unchanged_paths.len()
    }

    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written() + self.unchanged()
    }
}
