//! RustFile abstraction for structured Rust module generation.
//!
//! Organizes a module into banner, inner docs, `use` groups and body items.

use sdkgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::FileHeader,
};

/// Longer imports put their symbols on a line of their own.
const MAX_USE_WIDTH: usize = 100;

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// `std`, external crates, then the local crate, as rustfmt groups them.
    fn group(&self) -> u8 {
        let root = self.module.split("::").next().unwrap_or_default();
        match root {
            "std" | "core" | "alloc" => 0,
            "crate" | "super" | "self" => 2,
            _ => 1,
        }
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [one] => format!("use {}::{};", self.module, one),
            many => format!("use {}::{{{}}};", self.module, many.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let single = self.format();
        if single.len() <= MAX_USE_WIDTH || self.symbols.len() < 2 {
            return vec![CodeFragment::line(single)];
        }
        vec![CodeFragment::block(
            format!("use {}::{{", self.module),
            vec![CodeFragment::line(format!("{},", self.symbols.join(", ")))],
            "};",
        )]
    }
}

/// A structured representation of one emitted Rust module.
#[derive(Default)]
pub struct RustFile {
    header: Option<FileHeader>,
    docs: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated-file banner (`None` omits it).
    pub fn header(mut self, header: Option<FileHeader>) -> Self {
        self.header = header;
        self
    }

    /// Module-level `//!` documentation.
    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with 4-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        if let Some(header) = &self.header {
            builder.push_lines(&header.render("//"));
        }

        if let Some(docs) = &self.docs {
            for line in docs.lines().map(str::trim_end) {
                if line.is_empty() {
                    builder.push_line("//!");
                } else {
                    builder.push_line(&format!("//! {}", line));
                }
            }
            builder.push_blank();
        }

        let mut uses: Vec<&Use> = self.uses.iter().collect();
        uses.sort_by_key(|u| u.group());
        for (i, use_stmt) in uses.iter().enumerate() {
            if i > 0 && uses[i - 1].group() != use_stmt.group() {
                builder.push_blank();
            }
            builder.emit(*use_stmt);
        }
        if !uses.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::lines(self.0.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_groups_are_separated() {
        let code = RustFile::new()
            .use_stmt(Use::new("super::routes"))
            .use_stmt(Use::new("sdkgen_runtime").symbols(["Client", "Params"]))
            .use_stmt(Use::new("std::sync").symbol("LazyLock"))
            .add(RawCode::new("const A: u8 = 1;"))
            .render();
        assert_eq!(
            code,
            "use std::sync::LazyLock;\n\nuse sdkgen_runtime::{Client, Params};\n\nuse super::routes;\n\nconst A: u8 = 1;\n"
        );
    }

    #[test]
    fn test_long_use_wraps() {
        let code = RustFile::new()
            .use_stmt(Use::new("sdkgen_runtime").symbols([
                "CallConfig",
                "Client",
                "OperationOptions",
                "Params",
                "ResponseEnvelope",
                "TokenProvider",
                "Transport",
                "Value",
            ]))
            .render();
        assert_eq!(
            code,
            "use sdkgen_runtime::{\n    CallConfig, Client, OperationOptions, Params, ResponseEnvelope, TokenProvider, Transport, Value,\n};\n"
        );
    }

    #[test]
    fn test_header_and_docs() {
        let header = FileHeader {
            sdk_name: "DogParlorSDK".into(),
            generator_version: "0.0.0".into(),
        };
        let code = RustFile::new()
            .header(Some(header))
            .docs("Dog Parlor client.\n\nVersion 0.4.0.")
            .add(RawCode::new("pub mod routes;"))
            .render();
        assert_eq!(
            code,
            "// Code generated by sdkgen v0.0.0. DO NOT EDIT.\n// SDK: DogParlorSDK\n\n//! Dog Parlor client.\n//!\n//! Version 0.4.0.\n\npub mod routes;\n"
        );
    }
}
