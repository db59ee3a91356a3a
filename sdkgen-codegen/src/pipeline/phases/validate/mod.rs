//! Validate phase - runs lints on the swagger document.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateRouteLint, EmptyApiLint, ParameterTypeLint, PathParamsLint, TemplateSyntaxLint,
};

use crate::pipeline::{CompilationContext, Phase, ValidationError};

/// Phase that validates the document using configurable lints.
///
/// Every lint runs before the phase decides to fail, so a single
/// [`ValidationError`] lists all offending endpoints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(TemplateSyntaxLint),
                Box::new(DuplicateRouteLint),
                Box::new(PathParamsLint),
                Box::new(ParameterTypeLint),
                Box::new(EmptyApiLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check document integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.document, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            let diagnostics = ctx.errors().cloned().collect();
            return Err(ValidationError { diagnostics }.into());
        }

        Ok(())
    }
}
