//! Code generation outputs and file management.
//!
//! - [`FileHeader`] - Generated-file banner
//! - [`EmitOptions`] - Settings shared by every emitter
//! - [`FileRegistry`] - Declarative file registration and writing

mod header;
mod options;
mod registry;

pub use header::FileHeader;
pub use options::EmitOptions;
pub use registry::{FileEntry, FileRegistry, WriteStats};
