//! Lint for malformed URI templates.

use sdkgen_ir::UriTemplate;
use sdkgen_spec::SwaggerDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on path templates that do not parse.
pub struct TemplateSyntaxLint;

impl Lint for TemplateSyntaxLint {
    fn name(&self) -> &'static str {
        "template-syntax"
    }

    fn description(&self) -> &'static str {
        "Reject malformed URI templates"
    }

    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>) {
        for raw in document.paths.keys() {
            if let Err(err) = UriTemplate::parse(raw) {
                diagnostics.push(
                    Diagnostic::error("validate", format!("malformed URI template: {}", err))
                        .at(format!("paths.{}", raw)),
                );
            }
        }
    }
}
