//! Vercel config adapter

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::read_optional;
use crate::error::EnvDiffError;
use crate::model::EnvMap;

#[derive(Debug, Deserialize)]
struct VercelConfig {
    env: Option<BTreeMap<String, EnvValue>>,
    build: Option<BuildSection>,
}

#[derive(Debug, Deserialize)]
struct BuildSection {
    env: Option<BTreeMap<String, EnvValue>>,
}

/// Vercel env values are a single string or an array of strings; the
/// first element wins for arrays, and an empty array leaves the key
/// declared without a value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvValue {
    One(String),
    Many(Vec<String>),
}

impl EnvValue {
    fn first(&self) -> Option<String> {
        match self {
            EnvValue::One(value) => Some(value.clone()),
            EnvValue::Many(values) => values.first().cloned(),
        }
    }
}

/// Collect `env` and `build.env` into one map; build keys are prefixed
/// `BUILD__` so both scopes survive side by side.
pub fn parse(content: &str) -> Result<EnvMap, serde_json::Error> {
    let config: VercelConfig = serde_json::from_str(content)?;
    let mut env = EnvMap::new();

    if let Some(vars) = &config.env {
        for (key, value) in vars {
            env.set(key.clone(), value.first());
        }
    }

    if let Some(vars) = config.build.as_ref().and_then(|build| build.env.as_ref()) {
        for (key, value) in vars {
            env.set(format!("BUILD__{}", key), value.first());
        }
    }

    Ok(env)
}

/// Load a Vercel config. A missing file degrades to an empty map.
pub fn load(path: &Path) -> Result<EnvMap, EnvDiffError> {
    let Some(content) = read_optional(path, "Vercel config")? else {
        return Ok(EnvMap::new());
    };

    parse(&content).map_err(|_| EnvDiffError::Parse {
        what: "Vercel config",
        path: path.to_path_buf(),
    })
}
