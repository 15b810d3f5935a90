//! Git revision adapter
//!
//! Loads `<ref>:<path>` blobs through `git show` and parses them as
//! dotenv lines. Failures never abort a comparison; the source
//! degrades to an empty map after a warning, the same way a missing
//! optional file does.

use std::process::Command;

use super::dotenv;
use crate::model::EnvMap;
use crate::report;

/// Load a `<ref>:<path>` source.
pub fn load(spec: &str) -> EnvMap {
    match show(spec) {
        Some(content) => dotenv::parse(&content),
        None => {
            report::warn(&format!("Failed to load from git: {}", spec));
            EnvMap::new()
        }
    }
}

fn show(spec: &str) -> Option<String> {
    let (reference, path) = spec.split_once(':')?;
    if reference.is_empty() || path.is_empty() {
        return None;
    }

    let output = Command::new("git").args(["show", spec]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
