//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envdiff")]
#[command(about = "Compare environment variables across files, branches and deploy configs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two environment sources
    #[command(visible_alias = "d")]
    Diff {
        /// First source (file path, git ref, or integration handle)
        source_a: String,
        /// Second source (file path, git ref, or integration handle)
        source_b: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
        /// Show only added/removed variables
        #[arg(long)]
        only_missing: bool,
        /// Show only changed variables
        #[arg(long)]
        only_changed: bool,
        /// Mask variable values in output
        #[arg(long)]
        no_values: bool,
    },

    /// Validate an environment file against a baseline
    Check {
        /// Environment file to check
        env_file: PathBuf,
        /// Baseline file to compare against (default: .env.example)
        #[arg(long)]
        baseline: Option<PathBuf>,
    },

    /// Detect suspicious values in an environment file
    Audit {
        /// Environment file to audit
        env_file: PathBuf,
        /// Filter by severity
        #[arg(long, value_enum)]
        severity: Option<SeverityArg>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Markdown,
}

impl From<FormatArg> for crate::report::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => crate::report::OutputFormat::Text,
            FormatArg::Json => crate::report::OutputFormat::Json,
            FormatArg::Markdown => crate::report::OutputFormat::Markdown,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Warn,
    Error,
}

impl From<SeverityArg> for crate::model::Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Warn => crate::model::Severity::Warn,
            SeverityArg::Error => crate::model::Severity::Error,
        }
    }
}
