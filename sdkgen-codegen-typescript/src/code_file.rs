//! CodeFile abstraction for structured module generation.
//!
//! Provides a high-level API for generating TypeScript and JavaScript files
//! with a banner, organized imports, body content, and exports sections.

use sdkgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::FileHeader,
};

use crate::{
    Flavor,
    ast::{Export, Import},
};

/// A structured representation of one emitted module.
///
/// Organizes code into banner, imports, body and exports. Type-only imports
/// and exports are dropped for the JavaScript flavor.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new(Flavor::TypeScript)
///     .header(options.header())
///     .import(Import::new("./routes.js").named("routes"))
///     .add(operation_fn)
///     .render();
/// ```
pub struct CodeFile {
    flavor: Flavor,
    header: Option<FileHeader>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            header: None,
            imports: Vec::new(),
            body: Vec::new(),
            exports: Vec::new(),
        }
    }

    /// Set the generated-file banner (`None` omits it).
    pub fn header(mut self, header: Option<FileHeader>) -> Self {
        self.header = header;
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        if self.flavor.is_typed() || !import.is_type_only() {
            self.imports.push(import);
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a body element only for the TypeScript flavor.
    pub fn add_typed<R: Renderable>(self, node: R) -> Self {
        if self.flavor.is_typed() {
            self.add(node)
        } else {
            self
        }
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        if self.flavor.is_typed() || !export.is_type_only() {
            self.exports.push(export);
        }
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        if let Some(header) = &self.header {
            // Ends with its own blank line
            builder.push_lines(&header.render("//"));
        }

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
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

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
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
    fn test_empty_file() {
        assert_eq!(CodeFile::new(Flavor::TypeScript).render(), "");
    }

    #[test]
    fn test_header_precedes_imports() {
        let header = FileHeader {
            sdk_name: "DogParlorSDK".into(),
            generator_version: "0.0.0".into(),
        };
        let code = CodeFile::new(Flavor::TypeScript)
            .header(Some(header))
            .import(Import::new("axios").default("axios"))
            .render();
        assert_eq!(
            code,
            "// Code generated by sdkgen v0.0.0. DO NOT EDIT.\n// SDK: DogParlorSDK\n\nimport axios from \"axios\";\n"
        );
    }

    #[test]
    fn test_javascript_drops_types() {
        let code = CodeFile::new(Flavor::JavaScript)
            .import(Import::new("./routes.js").named("Route").type_only())
            .add_typed(RawCode::new("export type Id = string;"))
            .add(RawCode::new("const a = 1;"))
            .export(Export::from("./routes.js").named("Route").type_only())
            .render();
        assert_eq!(code, "const a = 1;\n");
    }

    #[test]
    fn test_blank_lines_between_sections() {
        let code = CodeFile::new(Flavor::TypeScript)
            .import(Import::new("./routes.js").named("routes"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"))
            .export(Export::from("./sdk.js"))
            .render();
        assert_eq!(
            code,
            "import { routes } from \"./routes.js\";\n\nconst a = 1;\n\nconst b = 2;\n\nexport * from \"./sdk.js\";\n"
        );
    }
}
