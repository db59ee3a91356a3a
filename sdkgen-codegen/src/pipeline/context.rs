//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use sdkgen_ir::{ApiIR, ApiMeta, Endpoint, OperationName};
use sdkgen_spec::SwaggerDocument;

use super::{
    PipelineOptions,
    diagnostic::{Diagnostic, Severity},
};

/// Context passed through all pipeline phases.
///
/// Each phase fills in the next stage of output; later stages stay `None`
/// until their phase has run.
#[derive(Debug)]
pub struct CompilationContext {
    /// The document being compiled.
    pub document: SwaggerDocument,
    pub options: PipelineOptions,
    /// Document metadata (populated by LowerPhase).
    pub meta: Option<ApiMeta>,
    /// Endpoints in document order (populated by LowerPhase).
    pub endpoints: Option<Vec<Endpoint>>,
    /// One name per endpoint, same order (populated by DeriveNamesPhase).
    pub names: Option<Vec<OperationName>>,
    /// The annotated IR (populated by ResolvePhase).
    pub ir: Option<ApiIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: SwaggerDocument, options: PipelineOptions) -> Self {
        Self {
            document,
            options,
            meta: None,
            endpoints: None,
            names: None,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    pub fn take_ir(&mut self) -> Result<ApiIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did ResolvePhase run?"))
    }
}
