//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - lints the document and fails on errors
//! - [`LowerPhase`] - turns path items into endpoints
//! - [`DeriveNamesPhase`] - assigns unique operation names
//! - [`ResolvePhase`] - resolves request shapes and assembles the IR

mod derive_names;
mod lower;
mod resolve;
mod validate;

pub use derive_names::DeriveNamesPhase;
pub use lower::LowerPhase;
pub use resolve::ResolvePhase;
pub use validate::{
    DuplicateRouteLint, EmptyApiLint, Lint, LintInfo, ParameterTypeLint, PathParamsLint,
    TemplateSyntaxLint, ValidatePhase,
};
