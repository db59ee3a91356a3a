//! Intermediate representation types for the sdkgen SDK generator.
//!
//! This crate provides the language-neutral model of an API surface used
//! across the generation pipeline. Every emitter consumes the same IR, which
//! is what keeps the generated SDKs behaviorally identical.
//!
//! # Architecture
//!
//! ```text
//! swagger.json → sdkgen-spec (parsing) → sdkgen-ir (endpoints) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (casing and escaping belong to emitters)
//! - Deterministic (ordered collections only)
//! - Serializable, so the pipeline state can be dumped for debugging

mod api;
mod endpoint;
mod method;
mod template;

pub use api::{
    ApiIR, ApiMeta, EndpointRegistry, Operation, OperationName, RegistryError, RequestShape,
    RouteEntry,
};
pub use endpoint::{Endpoint, ParamType, QueryParam};
pub use method::HttpMethod;
pub use template::{Segment, TemplateError, UriTemplate};
