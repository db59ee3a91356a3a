//! Swagger 2.0 document model.
//!
//! Only the parts of the format that influence generated SDKs are modelled;
//! schemas, responses and examples are accepted and ignored.

use std::{fmt, ops::Index, path::Path};

use indexmap::IndexMap;
use sdkgen_ir::HttpMethod;
use serde::{
    Deserialize,
    de::{Deserializer, MapAccess, Visitor},
};

use crate::{Error, Result, SourceContext};

/// A security requirement: scheme name → scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root of a Swagger 2.0 document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    /// Format version, must be `"2.0"`.
    pub swagger: String,
    #[serde(default)]
    pub info: Info,
    pub host: Option<String>,
    pub base_path: Option<String>,
    /// Path templates in document order.
    #[serde(default)]
    pub paths: Paths,
    /// Reusable parameters, referenced as `#/parameters/<name>`.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// Document-wide security requirements.
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default)]
    pub security_definitions: IndexMap<String, SecurityScheme>,
}

/// The `paths` object.
///
/// JSON objects may repeat a key. The first item is kept and the key is
/// recorded in [`Paths::duplicates`] so validation can reject it.
#[derive(Debug, Clone, Default)]
pub struct Paths {
    items: IndexMap<String, PathItem>,
    duplicates: Vec<String>,
}

impl Paths {
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PathItem> {
        self.items.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, PathItem> {
        self.items.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, PathItem> {
        self.items.values()
    }

    /// Keys that appeared more than once, each listed once.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    fn insert(&mut self, raw: String, item: PathItem) {
        if self.items.contains_key(&raw) {
            if !self.duplicates.contains(&raw) {
                self.duplicates.push(raw);
            }
        } else {
            self.items.insert(raw, item);
        }
    }
}

impl Index<&str> for Paths {
    type Output = PathItem;

    fn index(&self, raw: &str) -> &PathItem {
        &self.items[raw]
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = (&'a String, &'a PathItem);
    type IntoIter = indexmap::map::Iter<'a, String, PathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathsVisitor;

        impl<'de> Visitor<'de> for PathsVisitor {
            type Value = Paths;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of path templates to path items")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut paths = Paths::default();
                while let Some(raw) = map.next_key::<String>()? {
                    let item = map.next_value::<PathItem>()?;
                    paths.insert(raw, item);
                }
                Ok(paths)
            }
        }

        deserializer.deserialize_map(PathsVisitor)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    #[serde(rename = "in")]
    pub location: Option<String>,
}

/// Operations available on one path template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation on this path.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub get: Option<OperationObject>,
    pub post: Option<OperationObject>,
    pub put: Option<OperationObject>,
    pub delete: Option<OperationObject>,
    pub patch: Option<OperationObject>,
    pub head: Option<OperationObject>,
    pub options: Option<OperationObject>,
}

impl PathItem {
    /// Declared operations in registration order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &OperationObject)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&OperationObject> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationObject {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Overrides the document-level requirement when present. An empty list
    /// disables auth for this operation.
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    #[serde(alias = "formdata")]
    FormData,
    #[serde(other)]
    Unknown,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Unknown => "unknown",
        }
    }
}

/// A parameter object or a `$ref` to one.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in")]
    pub location: Option<ParameterLocation>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

impl Parameter {
    /// Returns true if this parameter is carried in the request body.
    pub fn is_body(&self) -> bool {
        matches!(
            self.location,
            Some(ParameterLocation::Body | ParameterLocation::FormData)
        )
    }
}

impl SwaggerDocument {
    /// Parse a document from JSON text (uses "swagger.json" as default filename).
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_json_with_filename(content, "swagger.json")
    }

    /// Parse a document with a custom filename for error reporting.
    pub fn from_json_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let doc: Self = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;

        if doc.swagger.trim() != "2.0" {
            return Err(Box::new(Error::UnsupportedVersion {
                src: ctx.named_source(),
                span: ctx.find_key("swagger"),
                version: doc.swagger.clone(),
            }));
        }
        Ok(doc)
    }

    /// Read and parse a document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_with_filename(&content, &path.display().to_string())
    }

    /// API title, defaulting to `"API"` when the document leaves it blank.
    pub fn title(&self) -> &str {
        match self.info.title.trim() {
            "" => "API",
            title => title,
        }
    }

    /// Resolve a `#/parameters/<name>` reference.
    pub fn resolve_parameter<'a>(&'a self, param: &'a Parameter) -> Option<&'a Parameter> {
        match &param.reference {
            None => Some(param),
            Some(reference) => reference
                .strip_prefix("#/parameters/")
                .and_then(|name| self.parameters.get(name)),
        }
    }

    /// Parameters of `op` merged over the ones shared by its path item, with
    /// references resolved. Operation-level entries win on name and location;
    /// unresolvable references are skipped.
    pub fn effective_parameters<'a>(
        &'a self,
        item: &'a PathItem,
        op: &'a OperationObject,
    ) -> Vec<&'a Parameter> {
        let mut merged: Vec<&Parameter> = item
            .parameters
            .iter()
            .filter_map(|p| self.resolve_parameter(p))
            .collect();

        for param in op.parameters.iter().filter_map(|p| self.resolve_parameter(p)) {
            match merged
                .iter_mut()
                .find(|p| p.name == param.name && p.location == param.location)
            {
                Some(existing) => *existing = param,
                None => merged.push(param),
            }
        }
        merged
    }

    /// `$ref` targets among the parameters of `op` that do not resolve.
    pub fn unresolved_references<'a>(
        &'a self,
        item: &'a PathItem,
        op: &'a OperationObject,
    ) -> Vec<&'a str> {
        item.parameters
            .iter()
            .chain(&op.parameters)
            .filter(|p| self.resolve_parameter(p).is_none())
            .filter_map(|p| p.reference.as_deref())
            .collect()
    }

    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"{
      "swagger": "2.0",
      "info": { "title": "Dogs", "version": "1.0.0" },
      "basePath": "/v1",
      "parameters": {
        "Limit": { "name": "limit", "in": "query", "type": "integer" }
      },
      "paths": {
        "/dogs/{id}": {
          "parameters": [{ "name": "id", "in": "path", "required": true, "type": "string" }],
          "delete": { "summary": "Remove" },
          "get": { "parameters": [{ "$ref": "#/parameters/Limit" }] }
        },
        "/dogs": {
          "post": { "parameters": [{ "name": "dog", "in": "body", "schema": {} }] }
        }
      }
    }"##;

    #[test]
    fn test_parse_preserves_document_order() {
        let doc = SwaggerDocument::from_json(DOC).unwrap();
        let paths: Vec<_> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/dogs/{id}", "/dogs"]);
        assert_eq!(doc.base_path.as_deref(), Some("/v1"));
        assert_eq!(doc.operation_count(), 3);
    }

    #[test]
    fn test_operations_in_method_order() {
        let doc = SwaggerDocument::from_json(DOC).unwrap();
        let methods: Vec<_> = doc.paths["/dogs/{id}"]
            .operations()
            .map(|(m, _)| m)
            .collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Delete]);
    }

    #[test]
    fn test_resolve_parameter_ref() {
        let doc = SwaggerDocument::from_json(DOC).unwrap();
        let op = doc.paths["/dogs/{id}"].get.as_ref().unwrap();
        let resolved = doc.resolve_parameter(&op.parameters[0]).unwrap();
        assert_eq!(resolved.name, "limit");
        assert_eq!(resolved.location, Some(ParameterLocation::Query));
    }

    #[test]
    fn test_effective_parameters_merge_path_item() {
        let doc = SwaggerDocument::from_json(DOC).unwrap();
        let item = &doc.paths["/dogs/{id}"];
        let op = item.get.as_ref().unwrap();
        let names: Vec<_> = doc
            .effective_parameters(item, op)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "limit"]);
        assert!(doc.unresolved_references(item, op).is_empty());
    }

    #[test]
    fn test_operation_parameter_overrides_shared_one() {
        let doc = SwaggerDocument::from_json(
            r##"{
              "swagger": "2.0",
              "paths": {
                "/dogs/{id}": {
                  "parameters": [{ "name": "id", "in": "path", "type": "string" }],
                  "get": {
                    "parameters": [
                      { "name": "id", "in": "path", "type": "integer", "description": "numeric" },
                      { "$ref": "#/parameters/Missing" }
                    ]
                  }
                }
              }
            }"##,
        )
        .unwrap();
        let item = &doc.paths["/dogs/{id}"];
        let op = item.get.as_ref().unwrap();
        let params = doc.effective_parameters(item, op);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].ty.as_deref(), Some("integer"));
        assert_eq!(
            doc.unresolved_references(item, op),
            vec!["#/parameters/Missing"]
        );
    }

    #[test]
    fn test_repeated_path_key_is_recorded() {
        let doc = SwaggerDocument::from_json(
            r#"{ "swagger": "2.0", "paths": {
                "/phones": { "get": { "operationId": "listPhones" } },
                "/dogs": { "get": {} },
                "/phones": { "get": { "operationId": "listPhonesAgain" } },
                "/phones": { "post": {} }
            } }"#,
        )
        .unwrap();

        assert_eq!(doc.paths.duplicates(), ["/phones"]);
        let keys: Vec<_> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/phones", "/dogs"]);
        let kept = doc.paths["/phones"].get.as_ref().unwrap();
        assert_eq!(kept.operation_id.as_deref(), Some("listPhones"));
    }

    #[test]
    fn test_body_parameter() {
        let doc = SwaggerDocument::from_json(DOC).unwrap();
        let op = doc.paths["/dogs"].post.as_ref().unwrap();
        assert!(op.parameters[0].is_body());
    }

    #[test]
    fn test_title_defaults_to_api() {
        let doc = SwaggerDocument::from_json(r#"{"swagger": "2.0", "paths": {}}"#).unwrap();
        assert_eq!(doc.title(), "API");
    }

    #[test]
    fn test_rejects_other_versions() {
        let err = SwaggerDocument::from_json(r#"{"swagger": "3.0", "paths": {}}"#).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_reports_json_syntax_errors() {
        let err = SwaggerDocument::from_json("{\n  \"swagger\": \"2.0\",\n  \"paths\": {\n}").unwrap_err();
        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let err = SwaggerDocument::open("/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
