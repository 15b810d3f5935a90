//! Railway config adapter

use std::path::Path;
use toml::Value;

use super::read_optional;
use crate::error::EnvDiffError;
use crate::model::EnvMap;

/// Extract the `[variables]` table. Scalar values are stringified the
/// way they would appear in the running environment; composite values
/// are not valid variables and are dropped.
pub fn parse(content: &str) -> Result<EnvMap, toml::de::Error> {
    let table: toml::Table = content.parse()?;
    let mut env = EnvMap::new();

    if let Some(Value::Table(variables)) = table.get("variables") {
        for (key, value) in variables {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Integer(n) => n.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(dt) => dt.to_string(),
                Value::Array(_) | Value::Table(_) => continue,
            };
            env.set(key.clone(), Some(rendered));
        }
    }

    Ok(env)
}

/// Load a Railway config. A missing file degrades to an empty map.
pub fn load(path: &Path) -> Result<EnvMap, EnvDiffError> {
    let Some(content) = read_optional(path, "Railway config")? else {
        return Ok(EnvMap::new());
    };

    parse(&content).map_err(|_| EnvDiffError::Parse {
        what: "Railway config",
        path: path.to_path_buf(),
    })
}
