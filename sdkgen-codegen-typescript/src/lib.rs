//! TypeScript and JavaScript emitters for the sdkgen SDK generator.
//!
//! Both flavors share one renderer; the JavaScript flavor drops type
//! annotations, type-only imports and type declarations.
//!
//! ```ignore
//! use sdkgen_codegen::pipeline::{Pipeline, PipelineOptions};
//! use sdkgen_codegen_typescript::{Generator, LanguageCodegen};
//!
//! let mut ctx = Pipeline::new().run(document, PipelineOptions::default())?;
//! let ir = ctx.take_ir()?;
//! Generator::typescript(&ir).generate(Path::new("sdk/ts"))?;
//! ```
//!
//! # Generated Output
//!
//! - `routes.ts` - the operation registry (`routes`, `Endpoints()`)
//! - `requests.ts` - `Client`, the response envelope and request building
//! - `sdk.ts` - one exported function per operation
//! - `index.ts` - re-exports of the above

mod code_file;
mod flavor;
mod generator;
mod naming;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use flavor::Flavor;
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
