//! Compilation pipeline from swagger document to annotated IR.
//!
//! The [`Pipeline`] runs its phases in a fixed order:
//!
//! ```text
//! validate → lower → name → resolve
//! ```
//!
//! Validation collects *every* problem before failing, so one run reports
//! all malformed endpoints at once through [`ValidationError`].
//!
//! # Example
//!
//! ```ignore
//! use sdkgen_codegen::pipeline::{Pipeline, PipelineOptions};
//!
//! let mut ctx = Pipeline::new().run(document, PipelineOptions::default())?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//! let ir = ctx.take_ir()?;
//! ```

mod context;
mod diagnostic;
mod error;
mod options;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use error::ValidationError;
pub use options::PipelineOptions;
pub use phase::Phase;
pub use runner::Pipeline;
