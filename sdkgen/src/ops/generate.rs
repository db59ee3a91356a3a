//! Generate operation - SDK emission for every requested target.

use eyre::{Context, Result};
use rayon::prelude::*;
use sdkgen_codegen::pipeline::Pipeline;
use sdkgen_spec::SwaggerDocument;
use tracing::{debug, info};

use crate::{
    language::LanguageSupport,
    reports::{
        GenerateReport, GenerationResult, PreviewFile, PreviewResult, TargetReport, WrittenResult,
    },
    settings::Settings,
};
use super::check::describe;

/// Run the pipeline once, then emit every target in parallel.
///
/// Each target writes into its own subdirectory of the output root. With
/// `dry_run` nothing is written and the report carries the file contents.
pub fn generate(
    document: SwaggerDocument,
    settings: &Settings,
    dry_run: bool,
) -> Result<GenerateReport> {
    let title = document.title().to_string();
    let mut ctx = Pipeline::new()
        .run(document, settings.pipeline_options())
        .wrap_err("Pipeline failed")?;
    let warnings = ctx.warnings().map(describe).collect();
    let ir = ctx.take_ir()?;
    let emit = settings.emit_options(&title);

    let targets = settings
        .targets()
        .par_iter()
        .map(|&target| -> Result<TargetReport> {
            let lang = LanguageSupport::get(target);
            let generator = lang.generator(&ir, emit.clone());

            let result = if dry_run {
                let files = generator
                    .preview()
                    .into_iter()
                    .map(|f| PreviewFile {
                        path: format!("{}/{}", lang.subdir, f.path),
                        content: f.content,
                    })
                    .collect();
                GenerationResult::Preview(PreviewResult { files })
            } else {
                let output_dir = settings.output.join(lang.subdir);
                debug!(lang = %target, dir = %output_dir.display(), "emitting");
                let result = generator
                    .generate(&output_dir)
                    .wrap_err_with(|| format!("Failed to generate {} SDK", target))?;
                info!(
                    lang = %target,
                    written = result.stats.written(),
                    unchanged = result.stats.unchanged(),
                    "emitted"
                );
                GenerationResult::Written(WrittenResult {
                    output_dir,
                    written: result.stats.written(),
                    unchanged: result.stats.unchanged(),
                })
            };
            Ok(TargetReport { target, result })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GenerateReport {
        sdk_name: emit.sdk_name,
        api_title: ir.meta.title.clone(),
        api_version: ir.meta.version.clone(),
        warnings,
        operation_count: ir.operations.len(),
        targets,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sdkgen_codegen::testing::load_fixture;
    use sdkgen_spec::Target;

    use super::*;
    use crate::settings::Overrides;

    fn settings(output: &std::path::Path, targets: Vec<Target>) -> Settings {
        Settings::resolve(
            None,
            Overrides {
                input: Some("swagger_telephone.json".into()),
                output: Some(output.to_path_buf()),
                targets,
                name: Some("TelephoneSDK".into()),
                ..Overrides::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_every_target_gets_a_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Target::ALL.to_vec());
        let document = load_fixture("swagger_telephone.json").unwrap();

        let report = generate(document, &settings, false).unwrap();
        assert_eq!(report.sdk_name, "TelephoneSDK");
        assert_eq!(report.operation_count, 4);
        let order: Vec<_> = report.targets.iter().map(|t| t.target).collect();
        assert_eq!(order, Target::ALL.to_vec());

        for path in [
            "typescript/sdk.ts",
            "javascript/sdk.js",
            "rust/operations.rs",
        ] {
            let content = fs::read_to_string(dir.path().join(path)).unwrap();
            assert!(content.contains("// SDK: TelephoneSDK"), "{}", path);
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir.path().join("out"), vec![Target::Rust]);
        let document = load_fixture("swagger_telephone.json").unwrap();

        let report = generate(document, &settings, true).unwrap();
        let GenerationResult::Preview(preview) = &report.targets[0].result else {
            panic!("expected a preview");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["rust/mod.rs", "rust/routes.rs", "rust/operations.rs"]);
        assert!(!dir.path().join("out").exists());
    }
}
