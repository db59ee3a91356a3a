//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Emitter AST nodes describe themselves as fragments; [`CodeBuilder`]
//! turns fragments into indented text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Several lines given as one string; each is indented.
    Lines(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A JSDoc comment (may span several lines).
    JsDoc(String),
    /// A Rust doc comment (may span several lines).
    RustDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn lines(s: impl Into<String>) -> Self {
        Self::Lines(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }

    pub fn rust_doc(s: impl Into<String>) -> Self {
        Self::RustDoc(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_slice().to_fragments()
    }
}
