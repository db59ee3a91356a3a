//! Output flavor: typed TypeScript or plain JavaScript.

/// Which of the two sibling languages to emit.
///
/// Both flavors share the file layout, registry and calling convention;
/// JavaScript drops type annotations and uses default parameters for the
/// positional slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    TypeScript,
    JavaScript,
}

impl Flavor {
    pub fn language(&self) -> &'static str {
        match self {
            Flavor::TypeScript => "typescript",
            Flavor::JavaScript => "javascript",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Flavor::TypeScript => "ts",
            Flavor::JavaScript => "js",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Flavor::TypeScript)
    }

    /// File name of module `stem` (e.g. `routes` → `routes.ts`).
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Specifier used to import module `stem` from a sibling file.
    ///
    /// Always `./<stem>.js`: Node ESM requires the extension and TypeScript
    /// resolves `.js` specifiers to the `.ts` source.
    pub fn import_path(&self, stem: &str) -> String {
        format!("./{}.js", stem)
    }
}
