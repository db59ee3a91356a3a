//! Function declaration builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::Flavor;

/// A parameter in a function signature.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            default: None,
        }
    }

    /// Mark the parameter optional: `name?: T` in TypeScript,
    /// `name = undefined` in JavaScript.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self, flavor: Flavor) -> String {
        match (flavor, &self.default) {
            (Flavor::TypeScript, Some(default)) => {
                format!("{}: {} = {}", self.name, self.ty, default)
            }
            (Flavor::TypeScript, None) => {
                let optional = if self.optional { "?" } else { "" };
                format!("{}{}: {}", self.name, optional, self.ty)
            }
            (Flavor::JavaScript, Some(default)) => format!("{} = {}", self.name, default),
            (Flavor::JavaScript, None) if self.optional => format!("{} = undefined", self.name),
            (Flavor::JavaScript, None) => self.name.clone(),
        }
    }
}

/// Builder for exported function declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    flavor: Flavor,
    doc: Option<String>,
    is_async: bool,
    generics: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>, flavor: Flavor) -> Self {
        Self {
            name: name.into(),
            flavor,
            doc: None,
            is_async: false,
            generics: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Type parameters, e.g. `T = unknown` (TypeScript only).
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Return type (TypeScript only).
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(|p| p.render(self.flavor))
            .collect::<Vec<_>>()
            .join(", ");

        let (generics, ret) = match (self.flavor, &self.return_type) {
            (Flavor::TypeScript, ret) => (
                self.generics
                    .as_ref()
                    .map(|g| format!("<{}>", g))
                    .unwrap_or_default(),
                ret.as_ref().map(|r| format!(": {}", r)).unwrap_or_default(),
            ),
            (Flavor::JavaScript, _) => (String::new(), String::new()),
        };

        format!(
            "export {}function {}{}({}){} {{",
            async_kw, self.name, generics, params, ret
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        let body = self.body.iter().map(CodeFragment::line).collect();
        fragments.push(CodeFragment::block(self.signature(), body, "}"));
        fragments
    }
}
