//! `mod.rs` - the SDK module root.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::ApiMeta;

use crate::{RawCode, RustFile};

pub struct ModRs {
    header: Option<FileHeader>,
    docs: String,
}

impl ModRs {
    pub fn new(header: Option<FileHeader>, meta: &ApiMeta, sdk_name: &str) -> Self {
        let title = if meta.title.is_empty() {
            sdk_name
        } else {
            meta.title.as_str()
        };
        let mut docs = format!("{} client.", title);
        if !meta.version.is_empty() {
            docs.push_str(&format!("\n\nAPI version {}.", meta.version));
        }
        if let Some(description) = &meta.description {
            docs.push_str("\n\n");
            docs.push_str(description);
        }
        Self { header, docs }
    }
}

impl GeneratedFile for ModRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .header(self.header.clone())
            .docs(&self.docs)
            .add(RawCode::new("mod operations;\npub mod routes;"))
            .add(RawCode::new(REEXPORTS))
            .render()
    }
}

const REEXPORTS: &str = "pub use operations::*;
pub use routes::endpoints;
pub use sdkgen_runtime::{
    CallConfig, Client, Params, ResponseEnvelope, StaticToken, TokenProvider, Transport, Value,
};";
