use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for sdkgen-spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles the raw document text with its filename so the error factories
/// below can attach a labelled span.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    /// Create a new source context.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Byte offset of a 1-based line/column position, clamped to the source.
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        (line_start + column.saturating_sub(1)).min(self.src.len())
    }

    /// Find the span of a quoted JSON key or a bare TOML key.
    pub fn find_key(&self, key: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", key);
        if let Some(pos) = self.src.find(&quoted) {
            return Some(SourceSpan::from((pos + 1, key.len())));
        }
        let bare = [format!("{} =", key), format!("{}=", key)];
        bare.iter()
            .find_map(|pattern| self.src.find(pattern.as_str()))
            .map(|pos| SourceSpan::from((pos, key.len())))
    }

    /// Create a JSON syntax or shape error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0)
            .then(|| SourceSpan::from((self.offset_of(source.line(), source.column()), 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a TOML parse error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelling `key` if it can be found.
    pub fn validation_error(&self, message: impl Into<String>, key: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: key.and_then(|k| self.find_key(k)),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that --input points at a Swagger 2.0 JSON file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid swagger json")]
    #[diagnostic(code(sdkgen::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse sdkgen.toml")]
    #[diagnostic(code(sdkgen::toml_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported swagger version '{version}'")]
    #[diagnostic(
        code(sdkgen::unsupported_version),
        help("only Swagger 2.0 documents are supported")
    )]
    UnsupportedVersion {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected \"2.0\"")]
        span: Option<SourceSpan>,
        version: String,
    },

    #[error("{message}")]
    #[diagnostic(code(sdkgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
