//! Rust-specific naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::{to_screaming_snake_case, to_snake_case};

/// Items every generated module defines next to the operations.
const MODULE_ITEMS: &[&str] = &[
    "default_client",
    "endpoints",
    "routes",
    "set_base_url",
    "set_token_provider",
    "set_transport",
];

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Not usable as raw identifiers
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        n if MODULE_ITEMS.contains(&n) => format!("{}_op", name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    function_case: to_snake_case,
    constant_case: to_screaming_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield", "default_client", "endpoints", "routes", "set_base_url", "set_token_provider",
        "set_transport",
    ],
    escape_reserved: escape_rust_reserved,
};

/// The identifier without its `r#` prefix, as used for registry keys.
pub fn bare_name(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}
