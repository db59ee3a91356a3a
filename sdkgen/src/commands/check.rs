use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::Overrides,
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckCommand {
    /// Print every diagnostic; exits with status 1 when any is an error.
    pub fn run(&self) -> Result<()> {
        let (settings, document) = self.source.load(Overrides::default())?;

        let report = ops::check(document, settings.pipeline_options(), &settings.input)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
