//! JSON rendering

use super::{ReportOptions, Reporter};
use crate::model::{AuditFinding, DiffResult};

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn report_diff(&self, result: &DiffResult, _options: &ReportOptions) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn report_audit(&self, findings: &[AuditFinding], _options: &ReportOptions) -> String {
        serde_json::to_string_pretty(findings).unwrap_or_else(|_| "[]".to_string())
    }
}
