//! `sdk.{ts,js}` - one exported function per operation.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::{HttpMethod, Operation};

use crate::{
    Flavor,
    ast::{Fn, Import, JsObject, Param},
    code_file::{CodeFile, RawCode},
};

/// What the sdk module needs to know about one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkOperation {
    pub fn_name: String,
    pub method: HttpMethod,
    pub uri: String,
    pub doc: Option<String>,
    pub has_body: bool,
    pub auth_required: bool,
    /// Sent between the base URL and the expanded `uri`.
    pub base_path: Option<String>,
    pub path_params: Vec<String>,
    pub query_params: Vec<String>,
}

impl SdkOperation {
    pub fn new(fn_name: impl Into<String>, op: &Operation, base_path: Option<&str>) -> Self {
        Self {
            fn_name: fn_name.into(),
            method: op.method(),
            uri: op.uri().to_string(),
            doc: op.endpoint.doc().map(str::to_string),
            has_body: op.shape.accepts_body,
            auth_required: op.shape.auth_required,
            base_path: base_path.map(str::to_string),
            path_params: op.shape.path_params.clone(),
            query_params: op.shape.query_params.iter().map(|q| q.name.clone()).collect(),
        }
    }

    fn jsdoc(&self) -> String {
        let mut lines = Vec::new();
        if let Some(doc) = &self.doc {
            lines.push(doc.clone());
            lines.push(String::new());
        }
        lines.push(format!("{} {}", self.method, self.uri));
        if !self.path_params.is_empty() {
            lines.push(format!("Path: {}", self.path_params.join(", ")));
        }
        if !self.query_params.is_empty() {
            lines.push(format!("Query: {}", self.query_params.join(", ")));
        }
        if self.has_body {
            lines.push("Body: sent as JSON".to_string());
        }
        lines.join("\n")
    }

    fn to_fn(&self, flavor: Flavor) -> Fn {
        let mut options = JsObject::new()
            .raw("hasBody", self.has_body.to_string())
            .raw("authRequired", self.auth_required.to_string());
        if let Some(base_path) = &self.base_path {
            options = options.string("basePath", base_path);
        }
        let options = options.inline();
        let generic = if flavor.is_typed() { "<T>" } else { "" };

        Fn::new(&self.fn_name, flavor)
            .doc(self.jsdoc())
            .async_()
            .generics("T = unknown")
            .param(Param::new("path", "PathParams").optional())
            .param(Param::new("query", "QueryParams").optional())
            .param(Param::new("body", "unknown").optional())
            .param(Param::new("config", "CallConfig").default_value("{}"))
            .returns("Promise<ResponseEnvelope<T>>")
            .body_line("const client = config.client ?? defaultClient;")
            .body_line(format!(
                "return client.request{}(routes.{}, {}, path, query, body, config);",
                generic, self.fn_name, options
            ))
    }
}

/// The sdk module. Functions are rendered sorted by name.
pub struct SdkFile {
    flavor: Flavor,
    header: Option<FileHeader>,
    operations: Vec<SdkOperation>,
}

impl SdkFile {
    pub fn new(flavor: Flavor, header: Option<FileHeader>, mut operations: Vec<SdkOperation>) -> Self {
        operations.sort_by(|a, b| a.fn_name.cmp(&b.fn_name));
        Self {
            flavor,
            header,
            operations,
        }
    }
}

impl GeneratedFile for SdkFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.flavor.file_name("sdk"))
    }

    fn render(&self) -> String {
        let file = CodeFile::new(self.flavor).header(self.header.clone());
        if self.operations.is_empty() {
            return file.add(RawCode::new("export {};")).render();
        }

        let requests = self.flavor.import_path("requests");
        file.import(Import::new(&requests).named("defaultClient"))
            .import(
                Import::new(&requests)
                    .named_all(["CallConfig", "PathParams", "QueryParams", "ResponseEnvelope"])
                    .type_only(),
            )
            .import(Import::new(self.flavor.import_path("routes")).named("routes"))
            .add_all(self.operations.iter().map(|op| op.to_fn(self.flavor)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_dog() -> SdkOperation {
        SdkOperation {
            fn_name: "getDogs2".into(),
            method: HttpMethod::Get,
            uri: "/dogs/{id}".into(),
            doc: Some("Fetch one dog".into()),
            has_body: false,
            auth_required: true,
            base_path: None,
            path_params: vec!["id".into()],
            query_params: Vec::new(),
        }
    }

    #[test]
    fn test_typescript_function() {
        let code = get_dog().to_fn(Flavor::TypeScript).build();
        assert_eq!(
            code,
            "/**
 * Fetch one dog
 *
 * GET /dogs/{id}
 * Path: id
 */
export async function getDogs2<T = unknown>(path?: PathParams, query?: QueryParams, body?: unknown, config: CallConfig = {}): Promise<ResponseEnvelope<T>> {
  const client = config.client ?? defaultClient;
  return client.request<T>(routes.getDogs2, { hasBody: false, authRequired: true }, path, query, body, config);
}
"
        );
    }

    #[test]
    fn test_javascript_function() {
        let op = SdkOperation {
            doc: None,
            path_params: Vec::new(),
            ..get_dog()
        };
        assert_eq!(
            op.to_fn(Flavor::JavaScript).build(),
            "/** GET /dogs/{id} */
export async function getDogs2(path = undefined, query = undefined, body = undefined, config = {}) {
  const client = config.client ?? defaultClient;
  return client.request(routes.getDogs2, { hasBody: false, authRequired: true }, path, query, body, config);
}
"
        );
    }

    #[test]
    fn test_base_path_in_options() {
        let op = SdkOperation {
            base_path: Some("/v1".into()),
            ..get_dog()
        };
        assert!(op.to_fn(Flavor::TypeScript).build().contains(
            "client.request<T>(routes.getDogs2, { hasBody: false, authRequired: true, basePath: \"/v1\" }, path, query, body, config);"
        ));
    }

    #[test]
    fn test_empty_module() {
        assert_eq!(SdkFile::new(Flavor::TypeScript, None, Vec::new()).render(), "export {};\n");
    }

    #[test]
    fn test_sorted_and_imports() {
        let post = SdkOperation {
            fn_name: "addDog".into(),
            method: HttpMethod::Post,
            uri: "/dogs".into(),
            has_body: true,
            path_params: Vec::new(),
            ..get_dog()
        };
        let code = SdkFile::new(Flavor::TypeScript, None, vec![get_dog(), post]).render();
        assert!(code.starts_with(
            "import { defaultClient } from \"./requests.js\";\nimport type { CallConfig, PathParams, QueryParams, ResponseEnvelope } from \"./requests.js\";\nimport { routes } from \"./routes.js\";\n\n"
        ));
        assert!(code.find("function addDog").unwrap() < code.find("function getDogs2").unwrap());
        assert!(code.contains(" * Body: sent as JSON\n"));
    }
}
