//! Audit finding structures

use serde::Serialize;

/// Finding severity.
///
/// `Error` orders after `Warn` so a descending sort puts errors first.
/// Serialized lowercase; text reports upper-case it for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identifier of the audit rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    SecretInPlain,
    LocalhostInProd,
    EmptySecret,
    WeakDefault,
    MissingRequired,
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            RuleId::SecretInPlain => "SECRET_IN_PLAIN",
            RuleId::LocalhostInProd => "LOCALHOST_IN_PROD",
            RuleId::EmptySecret => "EMPTY_SECRET",
            RuleId::WeakDefault => "WEAK_DEFAULT",
            RuleId::MissingRequired => "MISSING_REQUIRED",
        };
        write!(f, "{}", id)
    }
}

/// One audit rule match.
///
/// A single (key, value) pair may produce several findings, one per
/// matching rule; all are retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub key: String,
    pub value: String,
    pub rule: RuleId,
    pub severity: Severity,
}
