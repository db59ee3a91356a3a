//! Endpoints command report data structures.

use super::output::{Output, Report};

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    pub name: String,
    pub method: String,
    pub uri: String,
}

/// The derived registry, sorted by name.
#[derive(Debug)]
pub struct EndpointsReport {
    pub entries: Vec<EndpointEntry>,
}

impl Report for EndpointsReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for entry in &self.entries {
            out.preformatted(&format!(
                "{:width$}  {:7} {}",
                entry.name,
                entry.method,
                entry.uri,
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_columns_are_aligned() {
        let entry = |name: &str, method: &str, uri: &str| EndpointEntry {
            name: name.into(),
            method: method.into(),
            uri: uri.into(),
        };
        let report = EndpointsReport {
            entries: vec![
                entry("getDogs", "GET", "/dogs"),
                entry("getDogsAppointments", "GET", "/dogs/{id}/appointments"),
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "getDogs              GET     /dogs",
                "getDogsAppointments  GET     /dogs/{id}/appointments",
            ]
        );
    }
}
