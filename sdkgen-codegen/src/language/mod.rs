//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for SDK emitters
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
