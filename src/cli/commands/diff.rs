//! Diff command implementation

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::Context;
use crate::core::differ;
use crate::parser::Source;

/// Execute the diff command
pub fn execute(
    ctx: &Context,
    source_a: &str,
    source_b: &str,
    only_missing: bool,
    only_changed: bool,
) -> Result<ExitCode> {
    let env_a = Source::resolve(source_a).load()?;
    let env_b = Source::resolve(source_b).load()?;

    let mut result = differ::compare(&env_a, &env_b);

    // only-missing wins when both filters are given.
    if only_missing {
        result.changed.clear();
        result.unchanged.clear();
    } else if only_changed {
        result.added.clear();
        result.removed.clear();
        result.unchanged.clear();
    }

    println!("{}", ctx.report_diff(&result));

    Ok(ExitCode::SUCCESS)
}
