//! `routes.rs` - route constants and the `endpoints()` registry.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::HttpMethod;

use crate::{
    RustFile,
    ast::{Const, Fn},
    rust_file::Use,
};

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteItem {
    /// Registry key: the exported function name without `r#`.
    pub key: String,
    /// Name of the route constant.
    pub constant: String,
    pub method: HttpMethod,
    pub uri: String,
}

impl RouteItem {
    fn to_const(&self, under_base_path: bool) -> Const {
        let mut value = format!(
            "Route::new(Method::{}, {:?})",
            self.method.variant_name(),
            self.uri
        );
        if under_base_path {
            value.push_str(".under(BASE_PATH)");
        }
        Const::new(&self.constant, "Route", value)
    }
}

pub struct RoutesRs {
    header: Option<FileHeader>,
    items: Vec<RouteItem>,
    base_path: Option<String>,
}

impl RoutesRs {
    /// Items are rendered sorted by key.
    pub fn new(header: Option<FileHeader>, mut items: Vec<RouteItem>) -> Self {
        items.sort_by(|a, b| a.key.cmp(&b.key));
        Self {
            header,
            items,
            base_path: None,
        }
    }

    /// Serve every route below `base_path`. Registry URIs stay unprefixed.
    pub fn base_path(mut self, base_path: Option<String>) -> Self {
        self.base_path = base_path;
        self
    }

    fn endpoints_fn(&self) -> Fn {
        let f = Fn::new("endpoints")
            .doc("Every operation, keyed by its function name.")
            .returns("BTreeMap<&'static str, Route>");
        if self.items.is_empty() {
            return f.body_line("BTreeMap::new()");
        }
        self.items
            .iter()
            .fold(f.body_line("BTreeMap::from(["), |f, item| {
                f.body_line(format!("    ({:?}, {}),", item.key, item.constant))
            })
            .body_line("])")
    }
}

impl GeneratedFile for RoutesRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("routes.rs")
    }

    fn render(&self) -> String {
        let runtime = if self.items.is_empty() {
            Use::new("sdkgen_runtime").symbol("Route")
        } else {
            Use::new("sdkgen_runtime").symbols(["Method", "Route"])
        };

        let base_path = self.base_path.as_ref().map(|base_path| {
            Const::new("BASE_PATH", "&str", format!("{:?}", base_path))
                .doc("Prefix of every request path.")
        });
        let under_base_path = base_path.is_some();

        RustFile::new()
            .header(self.header.clone())
            .use_stmt(Use::new("std::collections").symbol("BTreeMap"))
            .use_stmt(runtime)
            .add_all(base_path)
            .add_all(self.items.iter().map(|item| item.to_const(under_base_path)))
            .add(self.endpoints_fn())
            .render()
    }
}
