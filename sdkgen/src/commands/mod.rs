mod check;
mod endpoints;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use endpoints::EndpointsCommand;
use eyre::Result;
use generate::GenerateCommand;
use sdkgen_spec::{AuthMode, PlaceholderStyle, SwaggerDocument};

use crate::settings::{Overrides, Settings};

/// Extension trait for exiting on document and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sdkgen_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sdkgen")]
#[command(version)]
#[command(about = "Generate API clients from Swagger 2.0 documents")]
pub(crate) struct Cli {
    /// Log debug output to stderr (otherwise `SDKGEN_LOG`, default `warn`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Endpoints(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SDKs for every requested target
    Generate(GenerateCommand),

    /// Validate a document without generating code
    Check(CheckCommand),

    /// Print the derived operation registry
    Endpoints(EndpointsCommand),
}

/// Where the document comes from and how it is interpreted.
#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
    /// Swagger 2.0 JSON document (overrides `[sdk].input`)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to sdkgen.toml (defaults to ./sdkgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Token fallback for operations without declared security
    #[arg(long, value_name = "bearer|none")]
    pub auth: Option<AuthMode>,

    /// How `{placeholder}` segments appear in derived names
    #[arg(long, value_name = "omit|by-name", value_parser = parse_placeholders)]
    pub placeholders: Option<PlaceholderStyle>,
}

impl SourceArgs {
    /// Merge the config file with these flags and `extra`, then open the
    /// document. Load errors exit with a diagnostic.
    pub fn load(&self, extra: Overrides) -> Result<(Settings, SwaggerDocument)> {
        let toml = Settings::load_config(self.config.as_deref()).unwrap_or_exit();
        let overrides = Overrides {
            input: self.input.clone(),
            auth: self.auth,
            placeholders: self.placeholders,
            ..extra
        };
        let settings = Settings::resolve(toml.as_ref(), overrides)?;
        let document = SwaggerDocument::open(&settings.input).unwrap_or_exit();
        Ok((settings, document))
    }
}

fn parse_placeholders(s: &str) -> Result<PlaceholderStyle, String> {
    match s.to_lowercase().as_str() {
        "omit" => Ok(PlaceholderStyle::Omit),
        "by-name" | "byname" => Ok(PlaceholderStyle::ByName),
        _ => Err(format!(
            "unknown placeholder style '{}', expected 'omit' or 'by-name'",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_placeholders() {
        assert_eq!(parse_placeholders("by-name"), Ok(PlaceholderStyle::ByName));
        assert_eq!(parse_placeholders("Omit"), Ok(PlaceholderStyle::Omit));
        assert!(parse_placeholders("braces").is_err());
    }
}
