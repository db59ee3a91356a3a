//! Object literal builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// A property value.
#[derive(Debug, Clone)]
enum Value {
    /// A literal string (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    Object(JsObject),
}

/// Builder for object literals.
///
/// Renders inline (`{ a: 1, b: "x" }`) with [`JsObject::inline`], or one
/// property per line via [`Renderable`].
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<(String, Value)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), Value::String(value.into())));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), Value::Raw(value.into())));
        self
    }

    /// Add a property with a nested object value, rendered inline.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push((key.into(), Value::Object(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render on a single line.
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props = self
            .properties
            .iter()
            .map(|(key, value)| format!("{}: {}", key, render_value(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", props)
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        Value::Raw(s) => s.clone(),
        Value::Object(obj) => obj.inline(),
    }
}

/// Quote a string as a double-quoted JS string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl Renderable for JsObject {
    /// Properties one per line with trailing commas; the caller supplies the
    /// surrounding braces.
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|(key, value)| CodeFragment::line(format!("{}: {},", key, render_value(value))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline() {
        let obj = JsObject::new()
            .string("method", "GET")
            .string("uri", "/dogs/{id}");
        assert_eq!(obj.inline(), "{ method: \"GET\", uri: \"/dogs/{id}\" }");
    }

    #[test]
    fn test_nested_and_raw() {
        let obj = JsObject::new().object(
            "getDogs",
            JsObject::new().raw("hasBody", "false"),
        );
        assert_eq!(
            obj.to_fragments(),
            vec![CodeFragment::line("getDogs: { hasBody: false },")]
        );
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(JsObject::new().inline(), "{}");
    }
}
