//! `sdkgen.toml` generator configuration.

mod options;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use options::{AuthMode, PlaceholderStyle, Target, VerbPreset};
use sdkgen_ir::HttpMethod;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Root of `sdkgen.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sdk: SdkConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// `[sdk]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfig {
    /// SDK name used in file banners and the Rust module doc.
    pub name: Option<String>,
    /// Swagger document, relative to the config file.
    pub input: Option<PathBuf>,
    /// Output root; each target writes into its own subdirectory.
    pub output: Option<PathBuf>,
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub auth: AuthMode,
    /// Emit the generated-file banner.
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            name: None,
            input: None,
            output: None,
            targets: default_targets(),
            auth: AuthMode::default(),
            banner: true,
        }
    }
}

/// `[naming]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default)]
    pub preset: VerbPreset,
    #[serde(default)]
    pub placeholders: PlaceholderStyle,
    #[serde(default = "default_true")]
    pub prefer_operation_id: bool,
    /// Per-method verb overrides, keyed by lowercase method name.
    #[serde(default)]
    pub verbs: BTreeMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            preset: VerbPreset::default(),
            placeholders: PlaceholderStyle::default(),
            prefer_operation_id: true,
            verbs: BTreeMap::new(),
        }
    }
}

impl NamingConfig {
    /// Verb overrides with parsed methods.
    pub fn verb_overrides(&self) -> impl Iterator<Item = (HttpMethod, &str)> {
        self.verbs.iter().filter_map(|(method, verb)| {
            HttpMethod::from_str(method)
                .ok()
                .map(|m| (m, verb.as_str()))
        })
    }
}

fn default_targets() -> Vec<Target> {
    vec![Target::TypeScript]
}

fn default_true() -> bool {
    true
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "sdkgen.toml")
    }
}

impl Config {
    /// Parse config text with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        for (method, verb) in &self.naming.verbs {
            if HttpMethod::from_str(method).is_err() {
                return Err(ctx.validation_error(
                    format!("unknown HTTP method '{}' in [naming.verbs]", method),
                    Some(method.as_str()),
                ));
            }
            if verb.is_empty() || !verb.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ctx.validation_error(
                    format!("verb for '{}' must be a non-empty alphanumeric word", method),
                    Some(method.as_str()),
                ));
            }
        }

        if self.sdk.targets.is_empty() {
            return Err(ctx.validation_error("[sdk] targets must not be empty", Some("targets")));
        }

        if let Some(name) = &self.sdk.name
            && name.trim().is_empty()
        {
            return Err(ctx.validation_error("[sdk] name must not be blank", Some("name")));
        }

        Ok(())
    }
}

/// Represents an sdkgen.toml file with both its location and parsed config.
#[derive(Debug, Clone)]
pub struct SdkgenToml {
    path: PathBuf,
    config: Config,
}

impl SdkgenToml {
    /// Open and parse an sdkgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a path from the config relative to the config file's directory.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        match self.path.parent() {
            Some(dir) if relative.is_relative() => dir.join(relative),
            _ => relative.to_path_buf(),
        }
    }
}
