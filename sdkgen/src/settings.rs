//! Effective settings: `sdkgen.toml` with command-line overrides applied.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eyre::{Result, eyre};
use sdkgen_codegen::{generation::EmitOptions, pipeline::PipelineOptions};
use sdkgen_spec::{AuthMode, Config, PlaceholderStyle, SdkgenToml, Target};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "sdkgen.toml";

/// Output root when neither `--out` nor `[sdk].output` is set.
pub const DEFAULT_OUTPUT: &str = "sdk";

/// Values given on the command line. Unset values fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub targets: Vec<Target>,
    pub name: Option<String>,
    pub auth: Option<AuthMode>,
    pub placeholders: Option<PlaceholderStyle>,
    pub no_banner: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// The merged configuration.
    pub config: Config,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    /// Open `path`, or `./sdkgen.toml` when no path is given and the file exists.
    pub fn load_config(path: Option<&Path>) -> sdkgen_spec::Result<Option<SdkgenToml>> {
        match path {
            Some(path) => SdkgenToml::open(path).map(Some),
            None if Path::new(DEFAULT_CONFIG).is_file() => SdkgenToml::open(DEFAULT_CONFIG).map(Some),
            None => Ok(None),
        }
    }

    /// Merge `overrides` over `toml`. Paths from the config file are relative
    /// to the file's directory.
    pub fn resolve(toml: Option<&SdkgenToml>, overrides: Overrides) -> Result<Self> {
        let mut config = toml.map(|t| t.config().clone()).unwrap_or_default();
        let relative = |path: &Path| toml.map_or_else(|| path.to_path_buf(), |t| t.resolve(path));

        let input = overrides
            .input
            .or_else(|| config.sdk.input.as_deref().map(relative))
            .ok_or_else(|| {
                eyre!(
                    "no input document: pass --input or set `input` under [sdk] in {}",
                    DEFAULT_CONFIG
                )
            })?;
        let output = overrides
            .output
            .or_else(|| config.sdk.output.as_deref().map(relative))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        if !overrides.targets.is_empty() {
            config.sdk.targets = overrides.targets;
        }
        if overrides.name.is_some() {
            config.sdk.name = overrides.name;
        }
        if let Some(auth) = overrides.auth {
            config.sdk.auth = auth;
        }
        if let Some(placeholders) = overrides.placeholders {
            config.naming.placeholders = placeholders;
        }
        if overrides.no_banner {
            config.sdk.banner = false;
        }

        let mut seen = HashSet::new();
        config.sdk.targets.retain(|target| seen.insert(*target));

        Ok(Self {
            config,
            input,
            output,
        })
    }

    pub fn targets(&self) -> &[Target] {
        &self.config.sdk.targets
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::from_config(&self.config)
    }

    /// Emit options; `title` names the SDK when the config does not.
    pub fn emit_options(&self, title: &str) -> EmitOptions {
        EmitOptions::from_config(&self.config, title)
    }
}
