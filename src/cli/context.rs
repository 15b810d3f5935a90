//! Command execution context

use colored::Colorize;
use std::io::IsTerminal;

use crate::model::{AuditFinding, DiffResult};
use crate::report::{get_reporter, OutputFormat, ReportOptions};

/// Common context for command execution
pub struct Context {
    pub format: OutputFormat,
    pub options: ReportOptions,
}

impl Context {
    /// Build a context for the chosen format. Color applies to text
    /// output on a TTY only; this is the one place that probes the
    /// terminal. Neither the core nor the reporters ever do.
    pub fn new(format: OutputFormat, mask_values: bool) -> Self {
        let color = format == OutputFormat::Text && std::io::stdout().is_terminal();
        Self {
            format,
            options: ReportOptions { mask_values, color },
        }
    }

    /// Render a diff result in the configured format.
    pub fn report_diff(&self, result: &DiffResult) -> String {
        get_reporter(self.format).report_diff(result, &self.options)
    }

    /// Render audit findings in the configured format.
    pub fn report_audit(&self, findings: &[AuditFinding]) -> String {
        get_reporter(self.format).report_audit(findings, &self.options)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }
}
