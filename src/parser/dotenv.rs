//! Dotenv file adapter

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use super::{read_optional, read_source};
use crate::error::EnvDiffError;
use crate::model::EnvMap;

lazy_static! {
    /// An assignment line: optional `export`, a valid variable name,
    /// `=`, and the raw remainder.
    static ref ASSIGNMENT: Regex =
        Regex::new(r"^(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*=(.*)$").unwrap();
}

/// Parse dotenv content into a normalized map.
///
/// Blank lines, comment lines and lines that do not look like
/// assignments are silently skipped. Surrounding quotes are stripped,
/// inline comments are dropped outside quotes, and `\n` escapes are
/// expanded inside double-quoted values. Duplicate keys keep the last
/// assignment.
pub fn parse(content: &str) -> EnvMap {
    let mut env = EnvMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = ASSIGNMENT.captures(trimmed) else {
            continue;
        };

        let key = caps[1].to_string();
        let value = parse_value(&caps[2]);
        env.set(key, Some(value));
    }

    env
}

/// Strip quoting and inline comments from a raw assignment value.
fn parse_value(raw: &str) -> String {
    let raw = raw.trim();

    match raw.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &raw[1..];
            // Up to the closing quote; an unterminated quote keeps the
            // rest of the line.
            let value = match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner,
            };
            if quote == '"' {
                value.replace("\\n", "\n")
            } else {
                value.to_string()
            }
        }
        _ => {
            let value = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            value.trim_end().to_string()
        }
    }
}

/// Read and parse a dotenv file. A missing file is fatal here, unlike
/// the baseline loader.
pub fn load(path: &Path) -> Result<EnvMap, EnvDiffError> {
    let content = read_source(path, ".env file")?;
    Ok(parse(&content))
}

/// Parse `.env.example`-style baseline content.
///
/// Every assignment line contributes its key even when nothing follows
/// the `=`, so required variables can be declared unassigned. Values
/// that do parse are retained; the rest become empty strings.
pub fn parse_example(content: &str) -> EnvMap {
    let parsed = parse(content);
    let mut env = EnvMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(caps) = ASSIGNMENT.captures(trimmed) {
            let key = &caps[1];
            let value = parsed.get(key).cloned().flatten().unwrap_or_default();
            env.set(key.to_string(), Some(value));
        }
    }

    env
}

/// Read and parse a baseline file. A missing baseline degrades to an
/// empty map rather than failing.
pub fn load_example(path: &Path) -> Result<EnvMap, EnvDiffError> {
    match read_optional(path, ".env.example file")? {
        Some(content) => Ok(parse_example(&content)),
        None => Ok(EnvMap::new()),
    }
}
