//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from document validation.
#[derive(Debug)]
pub struct CheckReport {
    /// The document that was checked.
    pub input: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Operations in the registry; zero when validation failed.
    pub operation_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.is_valid() {
            out.preformatted(&format!(
                "{} has {} error{}",
                self.input.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        if !self.warnings.is_empty() {
            out.newline();
        }
        out.preformatted(&format!(
            "✓ {} is valid ({} operation{})",
            self.input.display(),
            self.operation_count,
            if self.operation_count == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_valid_report() {
        let report = CheckReport {
            input: "swagger.json".into(),
            errors: Vec::new(),
            warnings: vec!["name collision".into()],
            infos: Vec::new(),
            operation_count: 4,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "warning: name collision",
                "",
                "✓ swagger.json is valid (4 operations)"
            ]
        );
    }

    #[test]
    fn test_invalid_report() {
        let report = CheckReport {
            input: "bad.json".into(),
            errors: vec!["malformed URI template (at paths./dogs/{id)".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            operation_count: 0,
        };
        assert!(!report.is_valid());
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines.last().unwrap(), "bad.json has 1 error");
    }
}
