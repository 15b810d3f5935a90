//! Check command implementation

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::Context;
use crate::core::{auditor, differ};
use crate::parser::dotenv;

lazy_static! {
    /// The `.env` / `.env.local`-style tail of a file name.
    static ref ENV_SUFFIX: Regex = Regex::new(r"\.env(\.[^.]+)?$").unwrap();
}

/// Execute the check command
pub fn execute(ctx: &Context, env_file: &Path, baseline: Option<&Path>) -> Result<ExitCode> {
    let env = dotenv::load(env_file)?;

    let baseline_file = match baseline {
        Some(path) => path.to_path_buf(),
        None => default_baseline(env_file),
    };
    let baseline = dotenv::load_example(&baseline_file)?;

    if baseline.is_empty() {
        println!("No baseline file found or baseline is empty");
        return Ok(ExitCode::SUCCESS);
    }

    let missing = differ::missing_keys(&env, &baseline);

    if missing.is_empty() {
        ctx.print_success("All required variables are present");
        return Ok(ExitCode::SUCCESS);
    }

    let findings = auditor::audit_missing(&env, &baseline);
    println!("{}", ctx.report_audit(&findings));

    Ok(ExitCode::FAILURE)
}

/// Derive the default baseline path: the sibling `.env.example` of a
/// `.env`-style file when it exists, else `.env.example` in the
/// current directory.
fn default_baseline(env_file: &Path) -> PathBuf {
    let name = env_file.to_string_lossy();
    let candidate = PathBuf::from(ENV_SUFFIX.replace(&name, ".env.example").into_owned());

    if candidate.exists() {
        candidate
    } else {
        PathBuf::from(".env.example")
    }
}
