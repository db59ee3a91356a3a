//! Lower phase - transforms the swagger document into endpoints.

use eyre::{Result, WrapErr};
use sdkgen_ir::{ApiMeta, Endpoint, HttpMethod, ParamType, QueryParam, UriTemplate};
use sdkgen_spec::{AuthMode, OperationObject, ParameterLocation, PathItem, SwaggerDocument};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that lowers every path item operation into an [`Endpoint`].
///
/// Runs after validation, so templates and parameter types are known to be
/// well formed.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform swagger paths into endpoints"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.meta = Some(lower_meta(&ctx.document));
        ctx.endpoints = Some(lower_paths(&ctx.document, ctx.options.auth)?);
        Ok(())
    }
}

fn lower_meta(document: &SwaggerDocument) -> ApiMeta {
    ApiMeta {
        title: document.title().to_string(),
        version: document.info.version.trim().to_string(),
        base_path: lower_base_path(document.base_path.as_deref()),
        description: non_blank(document.info.description.as_deref()),
    }
}

fn lower_paths(document: &SwaggerDocument, auth: AuthMode) -> Result<Vec<Endpoint>> {
    let mut endpoints = Vec::with_capacity(document.operation_count());

    for (raw, item) in &document.paths {
        let uri = UriTemplate::parse(raw)
            .wrap_err_with(|| format!("failed to parse URI template '{}'", raw))?;

        for (method, op) in item.operations() {
            endpoints.push(lower_operation(document, item, method, op, uri.clone(), auth));
        }
    }

    Ok(endpoints)
}

fn lower_operation(
    document: &SwaggerDocument,
    item: &PathItem,
    method: HttpMethod,
    op: &OperationObject,
    uri: UriTemplate,
    auth: AuthMode,
) -> Endpoint {
    let params = document.effective_parameters(item, op);

    let mut query_params: Vec<QueryParam> = params
        .iter()
        .filter(|p| p.location == Some(ParameterLocation::Query))
        .map(|p| QueryParam {
            name: p.name.clone(),
            ty: p
                .ty
                .as_deref()
                .and_then(ParamType::from_swagger)
                .unwrap_or(ParamType::String),
            required: p.required,
            description: non_blank(p.description.as_deref()),
        })
        .collect();
    query_params.sort_by(|a, b| a.name.cmp(&b.name));

    Endpoint {
        query_params,
        has_body: params.iter().any(|p| p.is_body()),
        auth_required: auth_required(document, op, auth),
        operation_id: non_blank(op.operation_id.as_deref()),
        summary: non_blank(op.summary.as_deref()),
        description: non_blank(op.description.as_deref()),
        ..Endpoint::new(method, uri)
    }
}

/// Operation security wins over document security, which wins over the
/// configured mode. `AuthMode::None` disables tokens everywhere.
fn auth_required(document: &SwaggerDocument, op: &OperationObject, auth: AuthMode) -> bool {
    if auth == AuthMode::None {
        return false;
    }
    match op.security.as_ref().or(document.security.as_ref()) {
        Some(requirements) => !requirements.is_empty(),
        None => auth == AuthMode::Bearer,
    }
}

/// `"v1/"` becomes `"/v1"`; blank and `"/"` mean no prefix.
fn lower_base_path(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
