//! Format adapters that normalize heterogeneous sources into `EnvMap`s

pub mod compose;
pub mod dotenv;
pub mod git;
pub mod railway;
pub mod vercel;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::EnvDiffError;
use crate::model::EnvMap;

/// A resolved comparison source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Dotenv(PathBuf),
    Compose(PathBuf),
    Vercel(PathBuf),
    Railway(PathBuf),
    /// `<ref>:<path>` loaded through `git show`.
    GitRef(String),
}

impl Source {
    /// Resolve a CLI source argument.
    ///
    /// `compose:`, `vercel:` and `railway:` handles select a format
    /// adapter, with a conventional default path when nothing follows
    /// the colon. Anything else containing `:` that does not look like
    /// a file path is treated as a git `<ref>:<path>` reference; plain
    /// arguments are dotenv file paths.
    pub fn resolve(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix("compose:") {
            let path = if rest.is_empty() {
                "./docker-compose.yml"
            } else {
                rest
            };
            return Source::Compose(PathBuf::from(path));
        }

        if let Some(rest) = raw.strip_prefix("vercel:") {
            let path = if rest.is_empty() { "./vercel.json" } else { rest };
            return Source::Vercel(PathBuf::from(path));
        }

        if let Some(rest) = raw.strip_prefix("railway:") {
            let path = if rest.is_empty() { "./railway.toml" } else { rest };
            return Source::Railway(PathBuf::from(path));
        }

        if raw.contains(':') && !raw.starts_with('/') && !raw.starts_with("./") {
            return Source::GitRef(raw.to_string());
        }

        Source::Dotenv(PathBuf::from(raw))
    }

    /// Load and normalize this source.
    ///
    /// Git refs degrade to an empty map with a warning on stderr;
    /// everything else propagates adapter errors.
    pub fn load(&self) -> Result<EnvMap, EnvDiffError> {
        match self {
            Source::Dotenv(path) => dotenv::load(path),
            Source::Compose(path) => compose::load(path),
            Source::Vercel(path) => vercel::load(path),
            Source::Railway(path) => railway::load(path),
            Source::GitRef(spec) => Ok(git::load(spec)),
        }
    }
}

/// Read a required source file. Missing files are fatal.
pub(crate) fn read_source(path: &Path, what: &'static str) -> Result<String, EnvDiffError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(EnvDiffError::FileNotFound(path.to_path_buf()))
        }
        Err(_) => Err(EnvDiffError::Parse {
            what,
            path: path.to_path_buf(),
        }),
    }
}

/// Read an optional source file. Missing files yield `None` so the
/// caller can degrade to an empty map.
pub(crate) fn read_optional(path: &Path, what: &'static str) -> Result<Option<String>, EnvDiffError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(_) => Err(EnvDiffError::Parse {
            what,
            path: path.to_path_buf(),
        }),
    }
}
