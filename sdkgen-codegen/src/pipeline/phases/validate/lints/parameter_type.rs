//! Lint for parameter types the generator cannot express.

use sdkgen_ir::ParamType;
use sdkgen_spec::{ParameterLocation, SwaggerDocument};

use super::{super::Lint, location, operations};
use crate::pipeline::Diagnostic;

/// Lint that errors on unsupported query/path parameter types and on
/// `$ref`s that point nowhere.
pub struct ParameterTypeLint;

impl Lint for ParameterTypeLint {
    fn name(&self) -> &'static str {
        "parameter-type"
    }

    fn description(&self) -> &'static str {
        "Reject unknown parameter types and dangling references"
    }

    fn check(&self, document: &SwaggerDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (raw, item, method, op) in operations(document) {
            for reference in document.unresolved_references(item, op) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("unresolved parameter reference '{}'", reference),
                    )
                    .at(location(raw, method)),
                );
            }

            for param in document.effective_parameters(item, op) {
                let (Some(loc @ (ParameterLocation::Query | ParameterLocation::Path)), Some(ty)) =
                    (param.location, param.ty.as_deref())
                else {
                    continue;
                };
                if ParamType::from_swagger(ty).is_none() {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "{} parameter '{}' has unsupported type '{}'",
                                loc.as_str(),
                                param.name,
                                ty
                            ),
                        )
                        .at(location(raw, method)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(json: &str) -> Vec<Diagnostic> {
        let document = SwaggerDocument::from_json(json).unwrap();
        let mut diagnostics = Vec::new();
        ParameterTypeLint.check(&document, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_supported_types() {
        let diagnostics = check(
            r#"{ "swagger": "2.0", "paths": { "/phones": { "get": { "parameters": [
                { "name": "country", "in": "query", "type": "string" },
                { "name": "limit", "in": "query", "type": "integer" },
                { "name": "active", "in": "query", "type": "boolean" },
                { "name": "tags", "in": "query", "type": "array" },
                { "name": "phone", "in": "body", "schema": { "type": "object" } }
            ] } } } }"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_object_query_param() {
        let diagnostics = check(
            r#"{ "swagger": "2.0", "paths": { "/cats": { "get": { "parameters": [
                { "name": "shape", "in": "query", "type": "object" }
            ] } } } }"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "query parameter 'shape' has unsupported type 'object'"
        );
    }

    #[test]
    fn test_dangling_reference() {
        let diagnostics = check(
            r##"{ "swagger": "2.0", "paths": { "/cats": { "get": { "parameters": [
                { "$ref": "#/parameters/Missing" }
            ] } } } }"##,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("#/parameters/Missing"));
    }
}
