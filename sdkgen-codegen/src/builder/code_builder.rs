//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Writes [`CodeFragment`]s into a buffer with proper indentation.
///
/// # Example
///
/// ```
/// use sdkgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "export function endpoints() {",
///     vec![CodeFragment::line("return routes;")],
///     "}",
/// ));
///
/// assert_eq!(builder.build(), "export function endpoints() {\n  return routes;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a blank line (no trailing whitespace).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add every line of `text` with current indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Consuming form of [`CodeBuilder::emit`].
    pub fn emit_node(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        self.emit(node);
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.push_line(&s),
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Lines(s) => {
                self.push_lines(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indented(body);
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => self.indented(fragments),
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => self.jsdoc(&text),
            CodeFragment::RustDoc(text) => self.rust_doc(&text),
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    pub fn push_line(&mut self, s: &str) {
        if s.is_empty() {
            self.buffer.push('\n');
            return;
        }
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    fn indented(&mut self, fragments: Vec<CodeFragment>) {
        self.indent_level += 1;
        for f in fragments {
            self.apply_fragment(f);
        }
        self.indent_level -= 1;
    }

    /// Single lines stay on one line.
    fn jsdoc(&mut self, text: &str) {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        match lines.as_slice() {
            [] => {}
            [single] => self.push_line(&format!("/** {} */", single)),
            many => {
                self.push_line("/**");
                for line in many {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
    }

    fn rust_doc(&mut self, text: &str) {
        for line in text.lines().map(str::trim_end) {
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mut builder: CodeBuilder, fragments: Vec<CodeFragment>) -> String {
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_block() {
        let code = render(
            CodeBuilder::rust(),
            vec![CodeFragment::block(
                "impl Client {",
                vec![CodeFragment::line("fn new() {}")],
                "}",
            )],
        );

        assert_eq!(code, "impl Client {\n    fn new() {}\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let code = render(
            CodeBuilder::typescript(),
            vec![CodeFragment::Indent(vec![
                CodeFragment::line("a;"),
                CodeFragment::line(""),
                CodeFragment::line("b;"),
            ])],
        );

        assert_eq!(code, "  a;\n\n  b;\n");
    }

    #[test]
    fn test_lines_indents_each_line() {
        let code = render(
            CodeBuilder::typescript(),
            vec![CodeFragment::Indent(vec![CodeFragment::lines("if (x) {\n  y();\n}\n")])],
        );

        assert_eq!(code, "  if (x) {\n    y();\n  }\n");
    }

    #[test]
    fn test_jsdoc_single_and_multi() {
        let single = render(CodeBuilder::typescript(), vec![CodeFragment::jsdoc("List dogs")]);
        assert_eq!(single, "/** List dogs */\n");

        let multi = render(
            CodeBuilder::typescript(),
            vec![CodeFragment::jsdoc("List dogs\n\nGET /dogs")],
        );
        assert_eq!(multi, "/**\n * List dogs\n *\n * GET /dogs\n */\n");
    }

    #[test]
    fn test_rust_doc_multi() {
        let code = render(
            CodeBuilder::rust(),
            vec![CodeFragment::rust_doc("Fetch a dog\n\nGET /dogs/{id}")],
        );
        assert_eq!(code, "/// Fetch a dog\n///\n/// GET /dogs/{id}\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct Fn;
        impl Renderable for Fn {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "function f() {",
                    vec![CodeFragment::line("return 1;")],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Fn);
        assert_eq!(builder.build(), "function f() {\n  return 1;\n}\n");
        assert_eq!(
            CodeBuilder::rust().emit_node(&Fn).build(),
            "function f() {\n    return 1;\n}\n"
        );
    }
}
