//! Pipeline orchestrator.

use eyre::Result;
use sdkgen_spec::SwaggerDocument;
use tracing::debug;

use super::{
    CompilationContext, Phase, PipelineOptions,
    phases::{DeriveNamesPhase, LowerPhase, ResolvePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases followed by any user phases.
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .phase(MyCustomPhase)
///     .run(document, PipelineOptions::default())?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase on `document`.
    ///
    /// # Errors
    ///
    /// Validation failures surface as a
    /// [`ValidationError`](super::ValidationError) inside the report.
    pub fn run(
        &self,
        document: SwaggerDocument,
        options: PipelineOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, options);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(DeriveNamesPhase),
            Box::new(ResolvePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "{}", phase.description());

        phase.run(ctx)?;

        debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
