//! TypeScript/JavaScript naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::{to_camel_case, to_screaming_snake_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("{}Op", name)
}

/// Naming conventions shared by the TypeScript and JavaScript flavors.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Operations are exported functions in camelCase
    function_case: to_camel_case,
    constant_case: to_screaming_snake_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict mode and module scope
        "arguments",
        "await",
        "eval",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
        // Names the generated modules already export
        "routes",
        "defaultClient",
        "setBaseUrl",
        "setTokenProvider",
        "setTransport",
    ],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use sdkgen_ir::OperationName;

    use super::*;

    #[test]
    fn test_function_names() {
        let name = OperationName::new(["list", "phone", "numbers"]);
        assert_eq!(TS_NAMING.function_name(&name), "listPhoneNumbers");

        let suffixed = OperationName::new(["get", "dogs", "2"]);
        assert_eq!(TS_NAMING.function_name(&suffixed), "getDogs2");
    }

    #[test]
    fn test_reserved_words() {
        assert!(TS_NAMING.is_reserved("delete"));
        assert!(TS_NAMING.is_reserved("setBaseUrl"));
        assert!(!TS_NAMING.is_reserved("getDogs"));
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(
            TS_NAMING.function_name(&OperationName::new(["delete"])),
            "deleteOp"
        );
        assert_eq!(
            TS_NAMING.function_name(&OperationName::new(["set", "base", "url"])),
            "setBaseUrlOp"
        );
    }
}
