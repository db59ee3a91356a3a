//! Lint trait for document validation.

use sdkgen_spec::SwaggerDocument;

use crate::pipeline::Diagnostic;

/// A lint that checks the document for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description of a lint, for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}
