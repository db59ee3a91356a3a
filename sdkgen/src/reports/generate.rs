//! Generate command report data structures.

use std::path::PathBuf;

use sdkgen_spec::Target;

use super::output::{Output, Report};

/// Report data from SDK generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub sdk_name: String,
    /// API title and version from the document.
    pub api_title: String,
    pub api_version: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub operation_count: usize,
    /// One result per target, in the order the targets were requested.
    pub targets: Vec<TargetReport>,
}

#[derive(Debug)]
pub struct TargetReport {
    pub target: Target,
    pub result: GenerationResult,
}

/// Result of code generation for one target.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: usize,
    pub unchanged: usize,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output root.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        let previews: Vec<&PreviewResult> = self
            .targets
            .iter()
            .filter_map(|t| match &t.result {
                GenerationResult::Preview(preview) => Some(preview),
                GenerationResult::Written(_) => None,
            })
            .collect();
        if !previews.is_empty() {
            self.render_preview(out, &previews);
            return;
        }

        out.preformatted(&format!("{} ({} v{})", self.sdk_name, self.api_title, self.api_version));
        out.key_value("Operations", &self.operation_count.to_string());
        out.newline();

        out.section("Generated");
        for target in &self.targets {
            if let GenerationResult::Written(written) = &target.result {
                out.list_item(&format!(
                    "{}: {} ({} written, {} unchanged)",
                    target.target,
                    written.output_dir.display(),
                    written.written,
                    written.unchanged
                ));
            }
        }
    }
}

impl GenerateReport {
    fn render_preview(&self, out: &mut dyn Output, previews: &[&PreviewResult]) {
        let mut count = 0;
        for preview in previews {
            for file in &preview.files {
                out.divider(&file.path);
                out.preformatted(&file.content);
                count += 1;
            }
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", count));
    }
}
