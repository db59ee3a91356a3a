//! Lint for documents without operations.

use sdkgen_spec::SwaggerDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when the document declares no operations.
pub struct EmptyApiLint;

impl Lint for EmptyApiLint {
    fn name(&self) -> &'static str {
        "empty-api"
    }

    fn description(&self) -> &'static str {
        "Warn when no operations are declared"
    }

    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>) {
        if document.operation_count() == 0 {
            diagnostics.push(
                Diagnostic::warning("validate", "document declares no operations").at("paths"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_operations() {
        let document =
            SwaggerDocument::from_json(r#"{ "swagger": "2.0", "paths": { "/dogs": {} } }"#)
                .unwrap();
        let mut diagnostics = Vec::new();
        EmptyApiLint.check(&document, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }
}
