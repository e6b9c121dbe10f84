//! Gap report output formatters.
//!
//! This module provides formatters for writing a [`GapReport`] in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::resolver::GapReport;
use std::io::Write;

/// Output format for gap reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting gap reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &GapReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
