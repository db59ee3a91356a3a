//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Built-in phases, in order:
/// - `ValidatePhase` - lints the document and fails on errors
/// - `LowerPhase` - turns path items into [`Endpoint`](sdkgen_ir::Endpoint)s
/// - `DeriveNamesPhase` - assigns unique operation names
/// - `ResolvePhase` - resolves request shapes and assembles the IR
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Non-fatal issues are recorded as diagnostics; an `Err` stops the
    /// pipeline.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
