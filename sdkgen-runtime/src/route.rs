//! Registry entries referenced by generated operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP methods a generated operation can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `{method, uri}` pair an operation name maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    pub method: Method,
    /// URI template with `{name}` placeholders.
    pub uri: &'static str,
    /// Sent before the expanded `uri`; empty for APIs served from the root.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub base_path: &'static str,
}

impl Route {
    pub const fn new(method: Method, uri: &'static str) -> Self {
        Self {
            method,
            uri,
            base_path: "",
        }
    }

    /// Serve this route below `base_path` (e.g. `"/v1"`).
    pub const fn under(mut self, base_path: &'static str) -> Self {
        self.base_path = base_path;
        self
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.uri)
    }
}

/// Per-operation switches baked in at generation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationOptions {
    /// Attach the `body` argument as JSON.
    pub has_body: bool,
    /// Send `Authorization: Bearer <token>` when the provider yields one.
    pub auth_required: bool,
}
