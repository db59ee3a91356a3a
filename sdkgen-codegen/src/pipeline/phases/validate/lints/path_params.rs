//! Lint for path parameters that do not match the template.

use sdkgen_ir::UriTemplate;
use sdkgen_spec::{ParameterLocation, SwaggerDocument};

use super::{super::Lint, location, operations};
use crate::pipeline::Diagnostic;

/// Lint that cross-checks declared path parameters against placeholders.
///
/// A declared path parameter with no placeholder is an error; a placeholder
/// without a declaration only warns, since the template alone is enough to
/// build the request.
pub struct PathParamsLint;

impl Lint for PathParamsLint {
    fn name(&self) -> &'static str {
        "path-params"
    }

    fn description(&self) -> &'static str {
        "Match declared path parameters with template placeholders"
    }

    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (raw, item, method, op) in operations(document) {
            let Ok(template) = UriTemplate::parse(raw) else {
                continue;
            };
            let placeholders = template.params();
            let declared: Vec<&str> = document
                .effective_parameters(item, op)
                .into_iter()
                .filter(|p| p.location == Some(ParameterLocation::Path))
                .map(|p| p.name.as_str())
                .collect();

            for name in declared.iter().filter(|n| !placeholders.contains(n)) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("path parameter '{}' has no placeholder in {}", name, raw),
                    )
                    .at(location(raw, method)),
                );
            }

            for name in placeholders.iter().filter(|n| !declared.contains(n)) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("placeholder '{{{}}}' has no declared path parameter", name),
                    )
                    .at(location(raw, method)),
                );
            }
        }
    }
}
