//! Lint for duplicate routes.

use std::collections::HashMap;

use sdkgen_ir::{HttpMethod, Segment, UriTemplate};
use sdkgen_spec::SwaggerDocument;

use super::{super::Lint, location, operations};
use crate::pipeline::Diagnostic;

/// Lint that errors when two operations serve the same method and route.
///
/// Placeholder names are erased before comparing, so `/dogs/{id}` and
/// `/dogs/{dogId}` are the same route. A path key repeated in the document
/// is an error too; only its first item survives parsing.
pub struct DuplicateRouteLint;

impl Lint for DuplicateRouteLint {
    fn name(&self) -> &'static str {
        "duplicate-route"
    }

    fn description(&self) -> &'static str {
        "Detect operations sharing a method and URI template"
    }

    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>) {
        for raw in document.paths.duplicates() {
            diagnostics.push(
                Diagnostic::error("validate", format!("path {} is declared more than once", raw))
                    .at(format!("paths.{}", raw)),
            );
        }

        let mut seen: HashMap<(HttpMethod, String), &str> = HashMap::new();

        for (raw, _, method, _) in operations(document) {
            // Malformed templates are reported by template-syntax
            let Ok(template) = UriTemplate::parse(raw) else {
                continue;
            };
            let key = (method, route_shape(&template));

            if let Some(first) = seen.get(&key) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate route {} {} (conflicts with {} {})",
                            method, raw, method, first
                        ),
                    )
                    .at(location(raw, method)),
                );
            } else {
                seen.insert(key, raw);
            }
        }
    }
}

fn route_shape(template: &UriTemplate) -> String {
    template
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Static(lit) => lit.as_str(),
            Segment::Param(_) => "{}",
        })
        .collect::<Vec<_>>()
        .join("/")
}
