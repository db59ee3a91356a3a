//! Unified target dispatch.
//!
//! Centralizes target-specific generator creation and output layout.

use sdkgen_codegen::{generation::EmitOptions, language::LanguageCodegen};
use sdkgen_codegen_rust::{Generator as RustGenerator, bare_name};
use sdkgen_codegen_typescript::Generator as TypeScriptGenerator;
use sdkgen_ir::ApiIR;
use sdkgen_spec::Target;

/// Output layout and generator creation for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSupport {
    pub target: Target,
    /// Subdirectory of the output root (e.g. `typescript/`).
    pub subdir: &'static str,
}

impl LanguageSupport {
    pub fn get(target: Target) -> Self {
        Self {
            target,
            subdir: target.as_str(),
        }
    }

    /// Create a generator for this target over `ir`.
    pub fn generator<'a>(
        &self,
        ir: &'a ApiIR,
        options: EmitOptions,
    ) -> Box<dyn LanguageCodegen + 'a> {
        match self.target {
            Target::TypeScript => Box::new(TypeScriptGenerator::typescript(ir).with_options(options)),
            Target::JavaScript => Box::new(TypeScriptGenerator::javascript(ir).with_options(options)),
            Target::Rust => Box::new(RustGenerator::new(ir).with_options(options)),
        }
    }

    /// Registry keys in operation order, as the emitted `Endpoints()` shows them.
    pub fn registry_keys(&self, ir: &ApiIR) -> Vec<String> {
        match self.target {
            Target::TypeScript | Target::JavaScript => TypeScriptGenerator::new(ir).function_names(),
            Target::Rust => RustGenerator::new(ir)
                .function_names()
                .iter()
                .map(|name| bare_name(name).to_string())
                .collect(),
        }
    }
}
