//! Shared code generation utilities for the sdkgen SDK generator.
//!
//! This crate turns a [`SwaggerDocument`](sdkgen_spec::SwaggerDocument) into
//! an annotated [`ApiIR`](sdkgen_ir::ApiIR) and provides the language-agnostic
//! pieces every emitter builds on.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Derivation of unique, casing-neutral operation names
//! - [`shape`] - Resolution of the positional request shape per operation
//! - [`pipeline`] - Validate → lower → name → resolve orchestration
//! - [`generation`] - Output management (file banners, FileSet)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod shape;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
