//! Constant and static item builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// A `pub const` (or `static`) item.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
    doc: Option<String>,
    is_public: bool,
    is_static: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            doc: None,
            is_public: true,
            is_static: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    fn statement(&self) -> String {
        format!(
            "{}{} {}: {} = {};",
            if self.is_public { "pub " } else { "" },
            if self.is_static { "static" } else { "const" },
            self.name,
            self.ty,
            self.value
        )
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc.clone()));
        }
        fragments.push(CodeFragment::line(self.statement()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_const_item() {
        let item = Const::new("GET_DOGS", "Route", "Route::new(Method::Get, \"/dogs\")");
        let code = CodeBuilder::rust().emit_node(&item).build();
        assert_eq!(
            code,
            "pub const GET_DOGS: Route = Route::new(Method::Get, \"/dogs\");\n"
        );
    }

    #[test]
    fn test_private_static() {
        let item = Const::new("DEFAULT_CLIENT", "LazyLock<Client>", "LazyLock::new(Client::new)")
            .private()
            .static_();
        assert_eq!(
            item.statement(),
            "static DEFAULT_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);"
        );
    }
}
