//! Endpoint records lowered from the API description.

use serde::Serialize;

use crate::{HttpMethod, UriTemplate};

/// One API operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    /// HTTP method.
    pub method: HttpMethod,
    /// Parsed URI template.
    pub uri: UriTemplate,
    /// Declared query parameters, sorted by name.
    pub query_params: Vec<QueryParam>,
    /// Whether the operation accepts a JSON body.
    pub has_body: bool,
    /// Whether a bearer token is attached to requests.
    pub auth_required: bool,
    /// `operationId` from the document, if any.
    pub operation_id: Option<String>,
    /// One-line summary for doc comments.
    pub summary: Option<String>,
    /// Longer description for doc comments.
    pub description: Option<String>,
}

impl Endpoint {
    /// Create an endpoint with no parameters, body or metadata.
    pub fn new(method: HttpMethod, uri: UriTemplate) -> Self {
        Self {
            method,
            uri,
            query_params: Vec::new(),
            has_body: false,
            auth_required: false,
            operation_id: None,
            summary: None,
            description: None,
        }
    }

    /// Path parameter names in template order.
    pub fn path_params(&self) -> Vec<&str> {
        self.uri.params()
    }

    /// Human-readable key, e.g. `GET /dogs/{id}`.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.uri)
    }

    /// Document location used in diagnostics, e.g. `paths./dogs/{id}.get`.
    pub fn location(&self) -> String {
        format!("paths.{}.{}", self.uri, self.method.as_lower())
    }

    /// Summary, falling back to the description.
    pub fn doc(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .or(self.description.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A declared query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: String,
    pub ty: ParamType,
    /// Recorded for documentation; generated code never enforces it.
    pub required: bool,
    pub description: Option<String>,
}

/// Primitive parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    /// Repeated values of a primitive type.
    Array,
}

impl ParamType {
    /// Map a swagger `type` keyword. Returns `None` for unsupported types.
    pub fn from_swagger(ty: &str) -> Option<Self> {
        match ty {
            "string" | "file" => Some(ParamType::String),
            "number" | "integer" => Some(ParamType::Number),
            "boolean" => Some(ParamType::Boolean),
            "array" => Some(ParamType::Array),
            _ => None,
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(method: HttpMethod, uri: &str) -> Endpoint {
        Endpoint::new(method, UriTemplate::parse(uri).unwrap())
    }

    #[test]
    fn test_key_and_location() {
        let ep = endpoint(HttpMethod::Get, "/dogs/{id}");
        assert_eq!(ep.key(), "GET /dogs/{id}");
        assert_eq!(ep.location(), "paths./dogs/{id}.get");
    }

    #[test]
    fn test_path_params_in_template_order() {
        let ep = endpoint(HttpMethod::Post, "/customers/{customerId}/bookings/{bookingId}");
        assert_eq!(ep.path_params(), vec!["customerId", "bookingId"]);
    }

    #[test]
    fn test_doc_prefers_summary() {
        let mut ep = endpoint(HttpMethod::Get, "/dogs");
        assert_eq!(ep.doc(), None);

        ep.description = Some("All dogs in the parlor".into());
        assert_eq!(ep.doc(), Some("All dogs in the parlor"));

        ep.summary = Some("List dogs".into());
        assert_eq!(ep.doc(), Some("List dogs"));
    }

    #[test]
    fn test_param_type_from_swagger() {
        assert_eq!(ParamType::from_swagger("integer"), Some(ParamType::Number));
        assert_eq!(ParamType::from_swagger("boolean"), Some(ParamType::Boolean));
        assert_eq!(ParamType::from_swagger("object"), None);
    }
}
