use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sdkgen_spec::Target;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::Overrides,
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    source: SourceArgs,

    /// Output root; each target writes into its own subdirectory (defaults to ./sdk)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Targets to emit: ts, js, rust (repeat or comma-separate)
    #[arg(short, long = "lang", value_delimiter = ',')]
    pub langs: Vec<Target>,

    /// SDK name for file banners (defaults to the API title)
    #[arg(long)]
    pub name: Option<String>,

    /// Omit the generated-file banner
    #[arg(long)]
    pub no_banner: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (settings, document) = self.source.load(Overrides {
            output: self.out.clone(),
            targets: self.langs.clone(),
            name: self.name.clone(),
            no_banner: self.no_banner,
            ..Overrides::default()
        })?;

        let report = ops::generate(document, &settings, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
