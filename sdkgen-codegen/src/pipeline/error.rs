use thiserror::Error;

use super::Diagnostic;

/// Every error diagnostic produced by validation.
#[derive(Debug, Clone, Error)]
#[error(
    "validation failed with {} error(s){}",
    .diagnostics.len(),
    list(.diagnostics)
)]
pub struct ValidationError {
    pub diagnostics: Vec<Diagnostic>,
}

fn list(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("\n  {}", d))
        .collect()
}
