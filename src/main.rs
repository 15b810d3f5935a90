//! envdiff - Environment Variable Diff & Audit

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use envdiff::cli::{commands, Cli, Commands, Context};
use envdiff::report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            report::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Diff {
            source_a,
            source_b,
            format,
            only_missing,
            only_changed,
            no_values,
        } => {
            let ctx = Context::new(format.into(), no_values);
            commands::diff::execute(&ctx, &source_a, &source_b, only_missing, only_changed)
        }
        Commands::Check { env_file, baseline } => {
            let ctx = Context::new(envdiff::OutputFormat::Text, false);
            commands::check::execute(&ctx, &env_file, baseline.as_deref())
        }
        Commands::Audit {
            env_file,
            severity,
            format,
        } => {
            let ctx = Context::new(format.into(), false);
            commands::audit::execute(&ctx, &env_file, severity.map(Into::into))
        }
    }
}
