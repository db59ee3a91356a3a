//! Endpoints operation - the derived registry.

use eyre::{Context, Result};
use sdkgen_codegen::pipeline::{Pipeline, PipelineOptions};
use sdkgen_spec::SwaggerDocument;

use crate::{
    language::LanguageSupport,
    reports::{EndpointEntry, EndpointsReport},
};

/// Derive the registry `lang` would emit for `document`, sorted by name.
pub fn endpoints(
    document: SwaggerDocument,
    options: PipelineOptions,
    lang: LanguageSupport,
) -> Result<EndpointsReport> {
    let mut ctx = Pipeline::new()
        .run(document, options)
        .wrap_err("Pipeline failed")?;
    let ir = ctx.take_ir()?;

    let mut entries: Vec<EndpointEntry> = lang
        .registry_keys(&ir)
        .into_iter()
        .zip(&ir.operations)
        .map(|(name, op)| EndpointEntry {
            name,
            method: op.method().to_string(),
            uri: op.uri().to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(EndpointsReport { entries })
}
