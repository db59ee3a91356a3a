//! Export statement builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for ES module re-exports.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    /// Re-export from another module; with no names this is `export *`.
    pub fn from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_type_only(&self) -> bool {
        self.type_only
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            return format!("export * from \"{}\";", self.from);
        }
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "export {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
