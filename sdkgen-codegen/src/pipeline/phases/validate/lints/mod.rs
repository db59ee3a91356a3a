//! Built-in lints for document validation.

mod duplicate_route;
mod empty_api;
mod parameter_type;
mod path_params;
mod template_syntax;

pub use duplicate_route::DuplicateRouteLint;
pub use empty_api::EmptyApiLint;
pub use parameter_type::ParameterTypeLint;
pub use path_params::PathParamsLint;
use sdkgen_ir::HttpMethod;
use sdkgen_spec::{OperationObject, PathItem, SwaggerDocument};
pub use template_syntax::TemplateSyntaxLint;

/// Every operation in document order, with its raw path template.
fn operations(
    document: &SwaggerDocument,
) -> impl Iterator<Item = (&str, &PathItem, HttpMethod, &OperationObject)> {
    document.paths.iter().flat_map(|(raw, item)| {
        item.operations()
            .map(move |(method, op)| (raw.as_str(), item, method, op))
    })
}

fn location(raw: &str, method: HttpMethod) -> String {
    format!("paths.{}.{}", raw, method.as_lower())
}
