//! Generated-file banner.

/// The banner placed at the top of every emitted file.
///
/// It names the SDK and the generator version. No timestamp is included so
/// regenerating from the same input is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub sdk_name: String,
    pub generator_version: String,
}

impl FileHeader {
    pub fn new(sdk_name: impl Into<String>) -> Self {
        Self {
            sdk_name: sdk_name.into(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "Code generated by sdkgen v{}. DO NOT EDIT.",
                self.generator_version
            ),
            format!("SDK: {}", self.sdk_name),
        ]
    }

    /// Render as line comments followed by a blank line.
    pub fn render(&self, comment: &str) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(comment);
            out.push(' ');
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}
