//! TypeScript and JavaScript SDK generator.

use std::path::Path;

use eyre::Result;
use sdkgen_codegen::{
    generation::{EmitOptions, FileEntry, FileRegistry},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use sdkgen_ir::ApiIR;
use tracing::debug;

use crate::{
    Flavor, TS_NAMING,
    files::{IndexFile, RequestsFile, RouteEntry, RoutesFile, SdkFile, SdkOperation},
};

/// Emits `routes`, `requests`, `sdk` and `index` modules for one flavor.
pub struct Generator<'a> {
    ir: &'a ApiIR,
    options: EmitOptions,
    flavor: Flavor,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        self.flavor.language()
    }

    fn file_extension(&self) -> &'static str {
        self.flavor.extension()
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
    /// A TypeScript generator with default options.
    pub fn new(ir: &'a ApiIR) -> Self {
        Self {
            ir,
            options: EmitOptions::default(),
            flavor: Flavor::TypeScript,
        }
    }

    pub fn typescript(ir: &'a ApiIR) -> Self {
        Self::new(ir)
    }

    pub fn javascript(ir: &'a ApiIR) -> Self {
        Self::new(ir).with_flavor(Flavor::JavaScript)
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Exported function names, in operation order.
    pub fn function_names(&self) -> Vec<String> {
        TS_NAMING.function_names(self.ir.operations.iter().map(|op| &op.name))
    }

    fn files(&self) -> FileRegistry {
        let names = self.function_names();
        let header = self.options.header();

        let routes = self
            .ir
            .operations
            .iter()
            .zip(&names)
            .map(|(op, name)| RouteEntry {
                name: name.clone(),
                method: op.method(),
                uri: op.uri().to_string(),
            })
            .collect();
        let operations = self
            .ir
            .operations
            .iter()
            .zip(&names)
            .map(|(op, name)| SdkOperation::new(name, op, self.ir.meta.base_path.as_deref()))
            .collect();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::from_generated(&RoutesFile::new(
            self.flavor,
            header.clone(),
            routes,
        )));
        registry.register(FileEntry::from_generated(&RequestsFile::new(
            self.flavor,
            header.clone(),
        )));
        registry.register(FileEntry::from_generated(&SdkFile::new(
            self.flavor,
            header.clone(),
            operations,
        )));
        registry.register(FileEntry::from_generated(&IndexFile::new(self.flavor, header)));

        for entry in registry.entries() {
            debug!(language = self.flavor.language(), path = %entry.path, "rendered module");
        }
        registry
    }
}
