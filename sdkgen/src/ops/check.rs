//! Check operation - document validation.

use std::path::Path;

use eyre::Result;
use sdkgen_codegen::pipeline::{Diagnostic, Pipeline, PipelineOptions, Severity, ValidationError};
use sdkgen_spec::SwaggerDocument;

use crate::reports::CheckReport;

/// Run the pipeline on `document` and collect every diagnostic.
///
/// Validation failures become report errors; any other pipeline failure is
/// returned as is.
pub fn check(document: SwaggerDocument, options: PipelineOptions, input: &Path) -> Result<CheckReport> {
    let (diagnostics, operation_count) = match Pipeline::new().run(document, options) {
        Ok(ctx) => {
            let count = ctx.ir.as_ref().map_or(0, |ir| ir.operations.len());
            (ctx.diagnostics, count)
        }
        Err(err) => match err.downcast::<ValidationError>() {
            Ok(validation) => (validation.diagnostics, 0),
            Err(other) => return Err(other),
        },
    };

    let mut report = CheckReport {
        input: input.to_path_buf(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        operation_count,
    };
    for diag in &diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }
    Ok(report)
}

/// Message with its document location on a second line.
pub(crate) fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
