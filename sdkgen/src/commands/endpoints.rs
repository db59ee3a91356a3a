use clap::Args;
use eyre::Result;
use sdkgen_spec::Target;

use super::SourceArgs;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
    settings::Overrides,
};

#[derive(Args)]
pub struct EndpointsCommand {
    #[command(flatten)]
    source: SourceArgs,

    /// Naming convention to show: ts, js or rust
    #[arg(short, long, default_value = "ts")]
    pub lang: Target,
}

impl EndpointsCommand {
    pub fn run(&self) -> Result<()> {
        let (settings, document) = self.source.load(Overrides::default())?;

        let report = ops::endpoints(
            document,
            settings.pipeline_options(),
            LanguageSupport::get(self.lang),
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
