//! Plain and colorized text rendering

use colored::Colorize;

use super::{ReportOptions, Reporter};
use crate::model::{AuditFinding, DiffResult, Severity};

pub struct TextReporter;

/// Applies a color only when enabled, so piped output stays clean.
struct Palette {
    color: bool,
}

impl Palette {
    fn green(&self, s: &str) -> String {
        self.apply(s, |s| s.green().to_string())
    }

    fn red(&self, s: &str) -> String {
        self.apply(s, |s| s.red().to_string())
    }

    fn yellow(&self, s: &str) -> String {
        self.apply(s, |s| s.yellow().to_string())
    }

    fn dim(&self, s: &str) -> String {
        self.apply(s, |s| s.dimmed().to_string())
    }

    fn bold(&self, s: &str) -> String {
        self.apply(s, |s| s.bold().to_string())
    }

    fn apply(&self, s: &str, paint: fn(&str) -> String) -> String {
        if self.color {
            paint(s)
        } else {
            s.to_string()
        }
    }
}

impl Reporter for TextReporter {
    fn report_diff(&self, result: &DiffResult, options: &ReportOptions) -> String {
        let paint = Palette {
            color: options.color,
        };
        let mut lines: Vec<String> = Vec::new();

        if !result.added.is_empty() {
            lines.push(paint.green("Added:"));
            for key in &result.added {
                lines.push(paint.green(&format!("  + {}", key)));
            }
            lines.push(String::new());
        }

        if !result.removed.is_empty() {
            lines.push(paint.red("Removed:"));
            for key in &result.removed {
                lines.push(paint.red(&format!("  - {}", key)));
            }
            lines.push(String::new());
        }

        if !result.changed.is_empty() {
            lines.push(paint.yellow("Changed:"));
            for change in &result.changed {
                let from = display_value(change.from.as_deref(), options);
                let to = display_value(change.to.as_deref(), options);
                lines.push(paint.yellow(&format!(
                    "  ~ {}: {} → {}",
                    change.key,
                    paint.dim(&from),
                    to
                )));
            }
            lines.push(String::new());
        }

        if !result.unchanged.is_empty() {
            lines.push(paint.dim(&format!(
                "Unchanged: {} variables",
                result.unchanged.len()
            )));
        }

        lines.join("\n")
    }

    fn report_audit(&self, findings: &[AuditFinding], options: &ReportOptions) -> String {
        let paint = Palette {
            color: options.color,
        };
        let mut lines: Vec<String> = Vec::new();

        if findings.is_empty() {
            lines.push(paint.bold("No issues found"));
            return lines.join("\n");
        }

        lines.push(paint.bold(&format!("Found {} issue(s):\n", findings.len())));

        for finding in findings {
            let severity = |s: &str| match finding.severity {
                Severity::Error => paint.red(s),
                Severity::Warn => paint.yellow(s),
            };
            let value = if options.mask_values {
                "***".to_string()
            } else {
                finding.value.clone()
            };

            lines.push(severity(&format!(
                "[{}] {}",
                finding.severity.to_string().to_uppercase(),
                finding.rule
            )));
            lines.push(severity(&format!("  Variable: {}", finding.key)));
            if !value.is_empty() {
                lines.push(severity(&format!("  Value: {}", value)));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn display_value(value: Option<&str>, options: &ReportOptions) -> String {
    if options.mask_values {
        "***".to_string()
    } else {
        value.unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangedVar, RuleId};

    fn plain() -> ReportOptions {
        ReportOptions {
            mask_values: false,
            color: false,
        }
    }

    fn sample_diff() -> DiffResult {
        DiffResult {
            added: vec!["NEW_KEY".into()],
            removed: vec!["OLD_KEY".into()],
            changed: vec![ChangedVar {
                key: "PORT".into(),
                from: Some("3000".into()),
                to: Some("8080".into()),
            }],
            unchanged: vec!["HOST".into()],
        }
    }

    #[test]
    fn test_diff_sections() {
        let output = TextReporter.report_diff(&sample_diff(), &plain());

        assert!(output.contains("Added:"));
        assert!(output.contains("  + NEW_KEY"));
        assert!(output.contains("Removed:"));
        assert!(output.contains("  - OLD_KEY"));
        assert!(output.contains("  ~ PORT: 3000 → 8080"));
        assert!(output.contains("Unchanged: 1 variables"));
    }

    #[test]
    fn test_diff_masks_values() {
        let options = ReportOptions {
            mask_values: true,
            color: false,
        };

        let output = TextReporter.report_diff(&sample_diff(), &options);

        assert!(output.contains("  ~ PORT: *** → ***"));
        assert!(!output.contains("8080"));
    }

    #[test]
    fn test_diff_empty_result_renders_nothing() {
        let output = TextReporter.report_diff(&DiffResult::default(), &plain());

        assert!(output.is_empty());
    }

    #[test]
    fn test_audit_findings() {
        let findings = vec![AuditFinding {
            key: "PASSWORD".into(),
            value: "admin".into(),
            rule: RuleId::SecretInPlain,
            severity: Severity::Error,
        }];

        let output = TextReporter.report_audit(&findings, &plain());

        assert!(output.contains("Found 1 issue(s):"));
        assert!(output.contains("[ERROR] SECRET_IN_PLAIN"));
        assert!(output.contains("  Variable: PASSWORD"));
        assert!(output.contains("  Value: admin"));
    }

    #[test]
    fn test_audit_empty_value_line_omitted() {
        let findings = vec![AuditFinding {
            key: "API_KEY".into(),
            value: String::new(),
            rule: RuleId::MissingRequired,
            severity: Severity::Error,
        }];

        let output = TextReporter.report_audit(&findings, &plain());

        assert!(!output.contains("Value:"));
    }

    #[test]
    fn test_audit_no_findings() {
        let output = TextReporter.report_audit(&[], &plain());

        assert_eq!(output, "No issues found");
    }

    #[test]
    fn test_no_ansi_codes_without_color() {
        let output = TextReporter.report_diff(&sample_diff(), &plain());

        assert!(!output.contains('\u{1b}'));
    }
}
