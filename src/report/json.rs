//! JSON output formatter.
//!
//! Formats gap reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::descriptor::DescriptorKind;
use crate::resolver::{GapReport, InterfaceStatus};
use serde::Serialize;
use std::io::Write;

/// Formats gap reports as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    application: &'a str,
    satisfied: bool,
    modules: Vec<JsonModule<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    id: &'a str,
    kind: DescriptorKind,
    required: &'a [InterfaceStatus],
    optional: &'a [InterfaceStatus],
}

#[derive(Serialize)]
struct JsonSummary {
    required: usize,
    unsatisfied_required: usize,
    optional: usize,
    unsatisfied_optional: usize,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &GapReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            application: &report.application_id,
            satisfied: report.is_satisfied(),
            modules: report
                .modules
                .iter()
                .map(|m| JsonModule {
                    id: &m.module_id,
                    kind: m.kind,
                    required: &m.required,
                    optional: &m.optional,
                })
                .collect(),
            summary: JsonSummary {
                required: report.required_count(),
                unsatisfied_required: report.unsatisfied_required_count(),
                optional: report.optional_count(),
                unsatisfied_optional: report.unsatisfied_optional_count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
