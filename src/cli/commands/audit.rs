//! Audit command implementation

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::Context;
use crate::core::auditor;
use crate::model::Severity;
use crate::parser::dotenv;

/// Execute the audit command
///
/// Exits non-zero when any error-severity finding exists; warnings
/// alone keep the exit code clean.
pub fn execute(ctx: &Context, env_file: &Path, severity: Option<Severity>) -> Result<ExitCode> {
    let env = dotenv::load(env_file)?;
    let findings = auditor::audit(&env, severity);

    println!("{}", ctx.report_audit(&findings));

    let has_errors = findings.iter().any(|f| f.severity == Severity::Error);
    Ok(if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
