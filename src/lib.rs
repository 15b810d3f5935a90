//! envdiff - Environment Variable Diff & Audit
//!
//! Compares environment-variable sets from heterogeneous sources and
//! reports additions, removals, changes and security-relevant
//! anomalies.
//!
//! # Features
//!
//! - Diff two sources: dotenv files, Docker Compose, Vercel, Railway
//!   configs, or git-tracked revisions
//! - Check an environment file against a `.env.example`-style baseline
//! - Audit for weak defaults, plaintext secrets and localhost values
//!   in production variables
//! - Text, JSON and markdown reports with optional value masking

pub mod cli;
pub mod core;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;

pub use crate::core::{audit, audit_missing, compare, missing_keys};
pub use error::EnvDiffError;
pub use model::{AuditFinding, ChangedVar, DiffResult, EnvMap, RuleId, Severity};
pub use parser::Source;
pub use report::{get_reporter, OutputFormat, Reporter};
