//! Name phase - assigns every endpoint a unique operation name.

use eyre::{Result, eyre};
use tracing::warn;

use crate::{
    naming::NameDeriver,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that derives operation names in registration order.
///
/// Collisions are resolved with numeric suffixes and reported as warnings.
pub struct DeriveNamesPhase;

impl Phase for DeriveNamesPhase {
    fn name(&self) -> &'static str {
        "name"
    }

    fn description(&self) -> &'static str {
        "Derive unique operation names"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let endpoints = ctx
            .endpoints
            .as_ref()
            .ok_or_else(|| eyre!("endpoints not set - did LowerPhase run?"))?;

        let mut deriver = NameDeriver::new(ctx.options.naming.clone());
        let mut names = Vec::with_capacity(endpoints.len());
        let mut diagnostics = Vec::new();

        for endpoint in endpoints {
            let derived = deriver.derive(endpoint);
            if let Some(existing) = &derived.collided_with {
                warn!(
                    endpoint = %endpoint.key(),
                    name = %derived.name.snake(),
                    "operation name collided with '{}'",
                    existing.snake()
                );
                diagnostics.push(
                    Diagnostic::warning(
                        "name",
                        format!(
                            "name '{}' is taken by an earlier operation, using '{}'",
                            existing.snake(),
                            derived.name.snake()
                        ),
                    )
                    .at(endpoint.location()),
                );
            }
            names.push(derived.name);
        }

        ctx.diagnostics.extend(diagnostics);
        ctx.names = Some(names);
        Ok(())
    }
}
