//! TypeScript/JavaScript AST builders for imports, exports, functions and
//! object literals.
//!
//! These provide a high-level API for constructing module syntax, which is
//! then rendered via CodeBuilder.

mod exports;
mod fns;
mod imports;
mod objects;

pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use objects::{JsObject, quote};
