//! Rust SDK generator.

use std::path::Path;

use eyre::Result;
use sdkgen_codegen::{
    generation::{EmitOptions, FileEntry, FileRegistry},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use sdkgen_ir::ApiIR;
use tracing::debug;

use crate::{
    RUST_NAMING, bare_name,
    files::{ModRs, OperationItem, OperationsRs, RouteItem, RoutesRs},
};

/// Emits an SDK module directory: `mod.rs`, `routes.rs` and `operations.rs`.
///
/// The module depends on the `sdkgen-runtime` crate for the client, the
/// envelope and the transport.
pub struct Generator<'a> {
    ir: &'a ApiIR,
    options: EmitOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files().preview()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let stats = self.files().write_all(output_dir)?;
        Ok(GenerateResult {
            language: self.language(),
            stats,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(ir: &'a ApiIR) -> Self {
        Self {
            ir,
            options: EmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Exported function names, in operation order. Raw identifiers keep
    /// their `r#` prefix.
    pub fn function_names(&self) -> Vec<String> {
        RUST_NAMING.function_names(self.ir.operations.iter().map(|op| &op.name))
    }

    fn files(&self) -> FileRegistry {
        let header = self.options.header();
        let mut routes = Vec::new();
        let mut operations = Vec::new();

        for (op, name) in self.ir.operations.iter().zip(self.function_names()) {
            let key = bare_name(&name).to_string();
            let constant = RUST_NAMING.constant_name(&op.name);
            routes.push(RouteItem {
                key,
                constant: constant.clone(),
                method: op.method(),
                uri: op.uri().to_string(),
            });
            operations.push(OperationItem::new(name, constant, op));
        }

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::from_generated(&ModRs::new(
            header.clone(),
            &self.ir.meta,
            &self.options.sdk_name,
        )));
        registry.register(FileEntry::from_generated(
            &RoutesRs::new(header.clone(), routes).base_path(self.ir.meta.base_path.clone()),
        ));
        registry.register(FileEntry::from_generated(&OperationsRs::new(header, operations)));

        for entry in registry.entries() {
            debug!(language = "rust", path = %entry.path, "rendered module");
        }
        registry
    }
}
