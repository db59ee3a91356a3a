//! Test utilities for SDK emitters.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use sdkgen_ir::ApiIR;
use sdkgen_spec::SwaggerDocument;

use crate::pipeline::{Pipeline, PipelineOptions};

/// Directory holding the shared swagger fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("fixtures")
}

/// Load a fixture document by file name (e.g. `swagger_telephone.json`).
pub fn load_fixture(name: &str) -> Result<SwaggerDocument> {
    let path = fixtures_dir().join(name);
    SwaggerDocument::open(&path)
        .wrap_err_with(|| format!("failed to load fixture {}", path.display()))
}

/// Run the full pipeline on a fixture and return its IR.
pub fn compile_fixture(name: &str, options: PipelineOptions) -> Result<ApiIR> {
    let document = load_fixture(name)?;
    Pipeline::new().run(document, options)?.take_ir()
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_telephone_fixture() {
        let ir = compile_fixture("swagger_telephone.json", PipelineOptions::default()).unwrap();
        let names: Vec<_> = ir.operations.iter().map(|op| op.name.snake()).collect();
        assert_eq!(
            names,
            vec![
                "list_phone_numbers",
                "create_phone_number",
                "get_phone_number",
                "delete_phone_number"
            ]
        );
    }

    #[test]
    fn test_invalid_fixture_fails() {
        assert!(compile_fixture("swagger_invalid.json", PipelineOptions::default()).is_err());
    }

    #[test]
    fn test_generate_to_temp() {
        let dir = generate_to_temp(|path| {
            std::fs::write(path.join("sdk.ts"), "export {};\n")?;
            Ok(())
        })
        .unwrap();
        assert!(dir.path().join("sdk.ts").exists());
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}
