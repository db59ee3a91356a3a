//! Rust emitter for the sdkgen SDK generator.
//!
//! The output is a module directory meant to be dropped into a crate that
//! depends on `sdkgen-runtime`:
//!
//! - `mod.rs` - module docs and re-exports
//! - `routes.rs` - one `Route` constant per operation and `endpoints()`
//! - `operations.rs` - the default client, its setters and one
//!   `async fn` per operation

mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use naming::{RUST_NAMING, bare_name};
pub use rust_file::{RawCode, RustFile, Use};
pub use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
