//! Rust function builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Signatures longer than this put one parameter per line.
const MAX_SIGNATURE_WIDTH: usize = 100;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_public: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
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

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

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
        CodeBuilder::rust().emit_node(self).build()
    }

    fn head(&self) -> String {
        format!(
            "{}{}fn {}",
            if self.is_public { "pub " } else { "" },
            if self.is_async { "async " } else { "" },
            self.name
        )
    }

    fn tail(&self) -> String {
        match &self.return_type {
            Some(ret) => format!(" -> {} {{", ret),
            None => " {".to_string(),
        }
    }

    fn signature(&self) -> Vec<CodeFragment> {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>();

        let single = format!("{}({}){}", self.head(), params.join(", "), self.tail());
        if single.len() <= MAX_SIGNATURE_WIDTH {
            return vec![CodeFragment::line(single)];
        }

        vec![
            CodeFragment::line(format!("{}(", self.head())),
            CodeFragment::Indent(
                params
                    .into_iter()
                    .map(|p| CodeFragment::line(format!("{},", p)))
                    .collect(),
            ),
            CodeFragment::line(format!("){}", self.tail())),
        ]
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc.clone()));
        }
        fragments.extend(self.signature());
        fragments.push(CodeFragment::Indent(
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}
