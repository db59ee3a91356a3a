//! Enumerated configuration values shared by the config file and the CLI.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported SDK targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// TypeScript (reference target)
    #[serde(alias = "ts")]
    TypeScript,
    /// Plain ES module JavaScript
    #[serde(alias = "js")]
    JavaScript,
    /// Rust, built on `sdkgen-runtime`
    #[serde(alias = "rs")]
    Rust,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::TypeScript, Target::JavaScript, Target::Rust];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::TypeScript => "typescript",
            Target::JavaScript => "javascript",
            Target::Rust => "rust",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Target::TypeScript),
            "javascript" | "js" => Ok(Target::JavaScript),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(format!(
                "unknown target '{}', expected 'ts', 'js' or 'rust'",
                s
            )),
        }
    }
}

/// How generated operations authenticate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Never attach a token.
    None,
    /// Attach `Authorization: Bearer <token>` unless the document disables it.
    #[default]
    Bearer,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(AuthMode::None),
            "bearer" => Ok(AuthMode::Bearer),
            _ => Err(format!(
                "unknown auth mode '{}', expected 'bearer' or 'none'",
                s
            )),
        }
    }
}

/// Base verb table for derived operation names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbPreset {
    /// Lowercased HTTP method (`GET` → `get`).
    #[default]
    Identity,
    /// `POST` → `create`, `PUT` → `replace`, `PATCH` → `update`.
    Semantic,
}

/// How `{placeholder}` segments contribute to derived names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderStyle {
    /// Dropped: `GET /dogs/{id}` → `getDogs`.
    #[default]
    Omit,
    /// Rendered as `by <name>`: `GET /dogs/{id}` → `getDogsById`.
    ByName,
}
