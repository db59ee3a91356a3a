//! `operations.rs` - the default client, its setters and one async
//! function per operation.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::{HttpMethod, Operation};

use crate::{
    RustFile,
    ast::{Const, Fn, Param},
    rust_file::Use,
};

/// What the operations module needs to know about one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationItem {
    pub fn_name: String,
    /// Route constant in `routes.rs`.
    pub constant: String,
    pub method: HttpMethod,
    pub uri: String,
    pub doc: Option<String>,
    pub has_body: bool,
    pub auth_required: bool,
    pub path_params: Vec<String>,
    pub query_params: Vec<String>,
}

impl OperationItem {
    pub fn new(fn_name: impl Into<String>, constant: impl Into<String>, op: &Operation) -> Self {
        Self {
            fn_name: fn_name.into(),
            constant: constant.into(),
            method: op.method(),
            uri: op.uri().to_string(),
            doc: op.endpoint.doc().map(str::to_string),
            has_body: op.shape.accepts_body,
            auth_required: op.shape.auth_required,
            path_params: op.shape.path_params.clone(),
            query_params: op.shape.query_params.iter().map(|q| q.name.clone()).collect(),
        }
    }

    fn rust_doc(&self) -> String {
        let mut sections = Vec::new();
        if let Some(doc) = &self.doc {
            sections.push(doc.clone());
        }
        sections.push(format!("`{} {}`", self.method, self.uri));
        if !self.path_params.is_empty() {
            sections.push(format!("Path: `{}`", self.path_params.join("`, `")));
        }
        if !self.query_params.is_empty() {
            sections.push(format!("Query: `{}`", self.query_params.join("`, `")));
        }
        if self.has_body {
            sections.push("Sends `body` as JSON.".to_string());
        }
        sections.join("\n\n")
    }

    fn to_fn(&self) -> Fn {
        Fn::new(&self.fn_name)
            .doc(self.rust_doc())
            .async_()
            .param(Param::new("path", "Option<&Params>"))
            .param(Param::new("query", "Option<&Params>"))
            .param(Param::new("body", "Option<&Value>"))
            .param(Param::new("config", "Option<&CallConfig>"))
            .returns("ResponseEnvelope")
            .body_line("let options = OperationOptions {")
            .body_line(format!("    has_body: {},", self.has_body))
            .body_line(format!("    auth_required: {},", self.auth_required))
            .body_line("};")
            .body_line("DEFAULT_CLIENT")
            .body_line(format!(
                "    .call(&routes::{}, options, path, query, body, config)",
                self.constant
            ))
            .body_line("    .await")
    }
}

pub struct OperationsRs {
    header: Option<FileHeader>,
    items: Vec<OperationItem>,
}

impl OperationsRs {
    /// Functions are rendered sorted by name.
    pub fn new(header: Option<FileHeader>, mut items: Vec<OperationItem>) -> Self {
        items.sort_by(|a, b| a.fn_name.cmp(&b.fn_name));
        Self { header, items }
    }

    fn setters() -> Vec<Fn> {
        vec![
            Fn::new("default_client")
                .doc("The client used when a call does not set `CallConfig::client`.")
                .returns("&'static Client")
                .body_line("&DEFAULT_CLIENT"),
            Fn::new("set_base_url")
                .param(Param::new("url", "impl Into<String>"))
                .body_line("DEFAULT_CLIENT.set_base_url(url);"),
            Fn::new("set_token_provider")
                .doc("Tokens are requested once per call of an authenticated operation.")
                .param(Param::new("provider", "impl TokenProvider + 'static"))
                .body_line("DEFAULT_CLIENT.set_token_provider(provider);"),
            Fn::new("set_transport")
                .param(Param::new("transport", "Arc<dyn Transport>"))
                .body_line("DEFAULT_CLIENT.set_transport(transport);"),
        ]
    }
}

impl GeneratedFile for OperationsRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("operations.rs")
    }

    fn render(&self) -> String {
        let mut runtime = vec!["CallConfig", "Client", "OperationOptions", "Params"];
        runtime.extend(["ResponseEnvelope", "TokenProvider", "Transport", "Value"]);
        if self.items.is_empty() {
            runtime.retain(|s| matches!(*s, "Client" | "TokenProvider" | "Transport"));
        }

        let mut file = RustFile::new()
            .header(self.header.clone())
            .use_stmt(Use::new("std::sync").symbols(["Arc", "LazyLock"]))
            .use_stmt(Use::new("sdkgen_runtime").symbols(runtime));
        if !self.items.is_empty() {
            file = file.use_stmt(Use::new("super::routes"));
        }

        file.add(
            Const::new(
                "DEFAULT_CLIENT",
                "LazyLock<Client>",
                "LazyLock::new(Client::new)",
            )
            .private()
            .static_(),
        )
        .add_all(Self::setters())
        .add_all(self.items.iter().map(OperationItem::to_fn))
        .render()
    }
}
