//! Import statement builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for ES module import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_type_only(&self) -> bool {
        self.type_only
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from \"{}\";",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        assert_eq!(
            Import::new("axios").default("axios").statement(),
            "import axios from \"axios\";"
        );
    }

    #[test]
    fn test_named_import() {
        let import = Import::new("./requests.js").named_all(["defaultClient", "Client"]);
        assert_eq!(
            import.statement(),
            "import { defaultClient, Client } from \"./requests.js\";"
        );
    }

    #[test]
    fn test_type_only_import() {
        let import = Import::new("./routes.js").named("Route").type_only();
        assert!(import.is_type_only());
        assert_eq!(
            import.statement(),
            "import type { Route } from \"./routes.js\";"
        );
    }
}
