//! Docker Compose adapter

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::read_optional;
use crate::error::EnvDiffError;
use crate::model::EnvMap;

#[derive(Debug, Deserialize)]
struct ComposeFile {
    #[serde(default)]
    services: BTreeMap<String, ComposeService>,
}

#[derive(Debug, Deserialize)]
struct ComposeService {
    environment: Option<Environment>,
}

/// Compose accepts both the list form (`KEY=VALUE` strings) and the
/// map form for `environment`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Environment {
    List(Vec<String>),
    Map(BTreeMap<String, Value>),
}

/// Flatten every service's `environment` into one map. Keys are
/// prefixed `<service>__KEY` to keep same-named variables from
/// different services apart.
pub fn parse(content: &str) -> Result<EnvMap, serde_yaml::Error> {
    let compose: ComposeFile = serde_yaml::from_str(content)?;
    let mut env = EnvMap::new();

    for (service, spec) in &compose.services {
        let Some(environment) = &spec.environment else {
            continue;
        };

        match environment {
            Environment::List(entries) => {
                for entry in entries {
                    // A bare `KEY` entry declares the variable with an
                    // empty value.
                    let (key, value) = match entry.split_once('=') {
                        Some((key, value)) => (key, value.to_string()),
                        None => (entry.as_str(), String::new()),
                    };
                    if !key.is_empty() {
                        env.set(format!("{}__{}", service, key), Some(value));
                    }
                }
            }
            Environment::Map(entries) => {
                for (key, value) in entries {
                    if let Some(value) = scalar_value(value) {
                        env.set(format!("{}__{}", service, key), value);
                    }
                }
            }
        }
    }

    Ok(env)
}

/// Render a YAML scalar as an env value. Explicit null means the
/// variable is declared without a value; composite values are not
/// valid environment entries and are dropped.
fn scalar_value(value: &Value) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s.clone())),
        Value::Bool(b) => Some(Some(b.to_string())),
        Value::Number(n) => Some(Some(n.to_string())),
        _ => None,
    }
}

/// Load a Compose file. A missing file degrades to an empty map so an
/// optional source does not fail the whole comparison.
pub fn load(path: &Path) -> Result<EnvMap, EnvDiffError> {
    let Some(content) = read_optional(path, "Docker Compose file")? else {
        return Ok(EnvMap::new());
    };

    parse(&content).map_err(|_| EnvDiffError::Parse {
        what: "Docker Compose file",
        path: path.to_path_buf(),
    })
}
