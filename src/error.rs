//! Error types for the source-loading boundary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a source into an `EnvMap`.
///
/// The diff/audit core is total and never produces these; they belong
/// to the adapter layer around it. A missing dotenv file is fatal,
/// while baselines and the optional format adapters degrade to an
/// empty map instead of reporting `FileNotFound`.
#[derive(Debug, Error)]
pub enum EnvDiffError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse {what}: {}", .path.display())]
    Parse { what: &'static str, path: PathBuf },
}
