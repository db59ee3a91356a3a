//! Request-shape resolution.
//!
//! Every generated operation takes the same positional arguments,
//! `(path?, query?, body?, config?)`, in every target language. The resolver
//! records which path and query names the request uses and whether the body
//! and bearer token are attached.

use sdkgen_ir::{Endpoint, RequestShape};

/// Resolve the request shape of one endpoint.
pub fn resolve(endpoint: &Endpoint) -> RequestShape {
    RequestShape {
        path_params: endpoint
            .path_params()
            .into_iter()
            .map(str::to_string)
            .collect(),
        query_params: endpoint.query_params.clone(),
        accepts_body: endpoint.has_body,
        auth_required: endpoint.auth_required,
    }
}
