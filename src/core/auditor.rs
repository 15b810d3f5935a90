//! Rule-based audit of environment values

use crate::model::{AuditFinding, EnvMap, RuleId, Severity};

const SECRET_KEYWORDS: &[&str] = &["password", "secret", "token", "key", "api_key", "private"];
const PROD_KEYWORDS: &[&str] = &["prod", "production", "live"];
const WEAK_SECRET_VALUES: &[&str] = &[
    "password", "secret", "admin", "root", "123456", "qwerty", "abc123",
];
const WEAK_DEFAULTS: &[&str] = &[
    "password", "secret", "changeme", "example", "test", "demo", "default", "12345",
];

/// One audit rule: metadata plus a match predicate.
///
/// Rules are plain data records so the set can grow without touching
/// call sites, and each rule is evaluated independently of the others.
struct AuditRule {
    id: RuleId,
    severity: Severity,
    matches: fn(key: &str, value: &str) -> bool,
}

const RULES: &[AuditRule] = &[
    AuditRule {
        id: RuleId::SecretInPlain,
        severity: Severity::Error,
        matches: secret_in_plain,
    },
    AuditRule {
        id: RuleId::LocalhostInProd,
        severity: Severity::Warn,
        matches: localhost_in_prod,
    },
    AuditRule {
        id: RuleId::EmptySecret,
        severity: Severity::Error,
        matches: empty_secret,
    },
    AuditRule {
        id: RuleId::WeakDefault,
        severity: Severity::Warn,
        matches: weak_default,
    },
];

fn is_secret_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SECRET_KEYWORDS.iter().any(|kw| key.contains(kw))
}

fn secret_in_plain(key: &str, value: &str) -> bool {
    if !is_secret_key(key) {
        return false;
    }
    let value = value.to_lowercase();
    WEAK_SECRET_VALUES.iter().any(|weak| value.contains(weak))
}

fn localhost_in_prod(key: &str, value: &str) -> bool {
    let key = key.to_lowercase();
    if !PROD_KEYWORDS.iter().any(|kw| key.contains(kw)) {
        return false;
    }
    value.contains("localhost") || value.contains("127.0.0.1")
}

fn empty_secret(key: &str, value: &str) -> bool {
    is_secret_key(key) && value.trim().is_empty()
}

fn weak_default(_key: &str, value: &str) -> bool {
    let value = value.to_lowercase();
    WEAK_DEFAULTS.iter().any(|weak| *weak == value)
}

/// Run every rule over every (key, value) pair with a defined value.
///
/// Keys without a value are skipped entirely. A pair may match zero,
/// one or several rules; each match yields its own finding.
///
/// With `min_severity` of `Error` only error findings are returned, in
/// rule-evaluation order. The unfiltered path is sorted by severity
/// descending (errors first) then key ascending; the filtered path
/// keeps the existing unsorted behavior on purpose.
pub fn audit(env: &EnvMap, min_severity: Option<Severity>) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for (key, value) in env.iter() {
        let Some(value) = value else { continue };

        for rule in RULES {
            if (rule.matches)(key, value) {
                findings.push(AuditFinding {
                    key: key.clone(),
                    value: value.clone(),
                    rule: rule.id,
                    severity: rule.severity,
                });
            }
        }
    }

    if min_severity == Some(Severity::Error) {
        findings.retain(|f| f.severity == Severity::Error);
        return findings;
    }

    findings.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| a.key.cmp(&b.key)));
    findings
}

/// One `MISSING_REQUIRED` error finding per baseline key absent from
/// `target`, with an empty observed value. Sorted by key.
pub fn audit_missing(target: &EnvMap, baseline: &EnvMap) -> Vec<AuditFinding> {
    baseline
        .keys()
        .filter(|key| !target.contains_key(key))
        .map(|key| AuditFinding {
            key: key.clone(),
            value: String::new(),
            rule: RuleId::MissingRequired,
            severity: Severity::Error,
        })
        .collect()
}
