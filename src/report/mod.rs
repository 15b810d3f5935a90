//! Report rendering for diff and audit results

mod json;
mod markdown;
mod text;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use colored::Colorize;

use crate::model::{AuditFinding, DiffResult};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Rendering options shared by all reporters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Replace every rendered value with `***`.
    pub mask_values: bool,
    /// Apply ANSI colors (text format only). The CLI decides this from
    /// TTY detection; reporters never probe the terminal themselves.
    pub color: bool,
}

/// Trait for report renderers.
pub trait Reporter {
    /// Render a diff result.
    fn report_diff(&self, result: &DiffResult, options: &ReportOptions) -> String;

    /// Render a list of audit findings.
    fn report_audit(&self, findings: &[AuditFinding], options: &ReportOptions) -> String;
}

/// Get a reporter for the requested output format.
pub fn get_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter),
        OutputFormat::Json => Box::new(JsonReporter),
        OutputFormat::Markdown => Box::new(MarkdownReporter),
    }
}

/// Print a warning to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Print an error to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
