//! Human-readable output formatter.

use super::ReportFormatter;
use crate::resolver::{GapReport, InterfaceStatus};
use crate::ui::AppdescTheme;
use std::io::Write;

/// Formats gap reports for terminal display.
pub struct HumanFormatter {
    theme: AppdescTheme,
}

impl HumanFormatter {
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: AppdescTheme::for_color(use_color),
        }
    }

    fn required_line(&self, status: &InterfaceStatus) -> String {
        if status.satisfied {
            format!("{}", self.theme.success.apply_to(format!("✓ {}", status.label())))
        } else {
            format!("{}", self.theme.error.apply_to(format!("✗ {}", status.label())))
        }
    }

    fn optional_line(&self, status: &InterfaceStatus) -> String {
        let text = format!("{} (optional)", status.label());
        if status.satisfied {
            format!("{}", self.theme.dim.apply_to(format!("· {}", text)))
        } else {
            format!("{}", self.theme.warning.apply_to(format!("? {}", text)))
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &GapReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.theme.format_header(&format!("Interfaces for {}", report.application_id))
        )?;

        if report.modules.is_empty() {
            writeln!(writer, "{}", self.theme.dim.apply_to("No module requires any interface"))?;
            return Ok(());
        }

        for module in &report.modules {
            writeln!(writer)?;
            writeln!(
                writer,
                "{} {}",
                self.theme.highlight.apply_to(&module.module_id),
                self.theme.dim.apply_to(format!("({})", module.kind))
            )?;
            for status in &module.required {
                writeln!(writer, "  {}", self.required_line(status))?;
            }
            for status in &module.optional {
                writeln!(writer, "  {}", self.optional_line(status))?;
            }
        }

        writeln!(writer)?;
        let required = report.required_count();
        let missing = report.unsatisfied_required_count();
        writeln!(
            writer,
            "{} of {} required interface(s) satisfied",
            required - missing,
            required
        )?;

        let optional_missing = report.unsatisfied_optional_count();
        if optional_missing > 0 {
            writeln!(
                writer,
                "{} optional interface(s) not provided",
                optional_missing
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorKind;
    use crate::resolver::ModuleGaps;

    fn status(id: &str, version: &str, satisfied: bool) -> InterfaceStatus {
        InterfaceStatus {
            id: id.into(),
            version: version.into(),
            satisfied,
        }
    }

    fn render(report: &GapReport) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false).format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn marks_each_interface() {
        let report = GapReport {
            application_id: "app-users-1.0.0".into(),
            modules: vec![ModuleGaps {
                module_id: "mod-users-16.1.0".into(),
                kind: DescriptorKind::Module,
                required: vec![status("users", "16.0", true), status("perms", "5.0", false)],
                optional: vec![status("notes", "1.0", false), status("tags", "1.0", true)],
            }],
        };

        let output = render(&report);

        assert!(output.contains("Interfaces for app-users-1.0.0"));
        assert!(output.contains("mod-users-16.1.0 (module)"));
        assert!(output.contains("✓ users-16.0"));
        assert!(output.contains("✗ perms-5.0"));
        assert!(output.contains("? notes-1.0 (optional)"));
        assert!(output.contains("· tags-1.0 (optional)"));
        assert!(output.contains("1 of 2 required interface(s) satisfied"));
        assert!(output.contains("1 optional interface(s) not provided"));
    }

    #[test]
    fn empty_report() {
        let report = GapReport {
            application_id: "app-1.0.0".into(),
            modules: vec![],
        };
        assert!(render(&report).contains("No module requires any interface"));
    }
}
