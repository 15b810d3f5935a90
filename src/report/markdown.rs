//! Markdown rendering

use super::{ReportOptions, Reporter};
use crate::model::{AuditFinding, DiffResult, Severity};

pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn report_diff(&self, result: &DiffResult, options: &ReportOptions) -> String {
        let mut lines = vec!["# Environment Diff Report\n".to_string()];

        if !result.added.is_empty() {
            lines.push("## Added\n".to_string());
            for key in &result.added {
                lines.push(format!("- **{}**", key));
            }
            lines.push(String::new());
        }

        if !result.removed.is_empty() {
            lines.push("## Removed\n".to_string());
            for key in &result.removed {
                lines.push(format!("- ~~{}~~", key));
            }
            lines.push(String::new());
        }

        if !result.changed.is_empty() {
            lines.push("## Changed\n".to_string());
            lines.push("| Variable | From | To |".to_string());
            lines.push("|----------|------|-----|".to_string());
            for change in &result.changed {
                let from = code_value(change.from.as_deref(), options);
                let to = code_value(change.to.as_deref(), options);
                lines.push(format!("| **{}** | {} | {} |", change.key, from, to));
            }
            lines.push(String::new());
        }

        if !result.unchanged.is_empty() {
            lines.push(format!(
                "_Unchanged: {} variables_\n",
                result.unchanged.len()
            ));
        }

        lines.join("\n")
    }

    fn report_audit(&self, findings: &[AuditFinding], options: &ReportOptions) -> String {
        let mut lines = vec!["# Environment Audit Report\n".to_string()];

        if findings.is_empty() {
            lines.push("**No issues found**\n".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found **{}** issue(s):\n", findings.len()));
        lines.push("| Severity | Rule | Variable | Value |".to_string());
        lines.push("|----------|------|----------|-------|".to_string());

        for finding in findings {
            let severity = match finding.severity {
                Severity::Error => "🔴 ERROR",
                Severity::Warn => "⚠️  WARN",
            };
            let value = if options.mask_values {
                "`***`".to_string()
            } else {
                format!("`{}`", finding.value)
            };
            lines.push(format!(
                "| {} | {} | **{}** | {} |",
                severity, finding.rule, finding.key, value
            ));
        }

        lines.join("\n")
    }
}

fn code_value(value: Option<&str>, options: &ReportOptions) -> String {
    if options.mask_values {
        "`***`".to_string()
    } else {
        format!("`{}`", value.unwrap_or_default())
    }
}
