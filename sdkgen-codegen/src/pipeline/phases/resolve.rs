//! Resolve phase - attaches request shapes and assembles the IR.

use eyre::{Result, WrapErr, bail, eyre};
use sdkgen_ir::{ApiIR, Operation};

use crate::{
    pipeline::{CompilationContext, Phase},
    shape,
};

/// Phase that pairs endpoints with their names and request shapes.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve request shapes and build the API IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let endpoints = ctx
            .endpoints
            .take()
            .ok_or_else(|| eyre!("endpoints not set - did LowerPhase run?"))?;
        let names = ctx
            .names
            .take()
            .ok_or_else(|| eyre!("names not set - did DeriveNamesPhase run?"))?;
        if names.len() != endpoints.len() {
            bail!(
                "{} names derived for {} endpoints",
                names.len(),
                endpoints.len()
            );
        }

        let operations = endpoints
            .into_iter()
            .zip(names)
            .map(|(endpoint, name)| Operation {
                name,
                shape: shape::resolve(&endpoint),
                endpoint,
            })
            .collect();

        let ir = ApiIR {
            meta: ctx.meta.take().unwrap_or_default(),
            operations,
        };
        ir.registry().wrap_err("failed to build endpoint registry")?;

        ctx.ir = Some(ir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_spec::SwaggerDocument;

    use super::*;
    use crate::pipeline::{
        PipelineOptions,
        phases::{DeriveNamesPhase, LowerPhase},
    };

    fn resolve(json: &str) -> ApiIR {
        let document = SwaggerDocument::from_json(json).unwrap();
        let mut ctx = CompilationContext::new(document, PipelineOptions::default());
        LowerPhase.run(&mut ctx).unwrap();
        DeriveNamesPhase.run(&mut ctx).unwrap();
        ResolvePhase.run(&mut ctx).unwrap();
        ctx.take_ir().unwrap()
    }

    #[test]
    fn test_booking_shapes() {
        let ir = resolve(include_str!(
            "../../../../fixtures/swagger_customer_booking.json"
        ));
        let create = ir
            .find(
                sdkgen_ir::HttpMethod::Post,
                "/customers/{customerId}/bookings",
            )
            .unwrap();
        assert_eq!(create.name.snake(), "create_booking");
        assert_eq!(create.shape.path_params, vec!["customerId"]);
        assert!(create.shape.accepts_body);

        let registry = ir.registry().unwrap();
        assert_eq!(registry.len(), ir.operations.len());
    }

    #[test]
    fn test_names_must_match_endpoints() {
        let document = SwaggerDocument::from_json(
            r#"{ "swagger": "2.0", "paths": { "/dogs": { "get": {} } } }"#,
        )
        .unwrap();
        let mut ctx = CompilationContext::new(document, PipelineOptions::default());
        LowerPhase.run(&mut ctx).unwrap();
        ctx.names = Some(Vec::new());
        assert!(ResolvePhase.run(&mut ctx).is_err());
    }
}
