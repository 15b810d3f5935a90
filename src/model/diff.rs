//! Diff result structures

use serde::Serialize;

/// Classified comparison of two environment maps.
///
/// Every key present in either input lands in exactly one of the four
/// buckets, never two. All buckets are sorted by key ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Keys present in B but not in A.
    pub added: Vec<String>,
    /// Keys present in A but not in B.
    pub removed: Vec<String>,
    /// Keys present in both with differing values.
    pub changed: Vec<ChangedVar>,
    /// Keys present in both with identical values.
    pub unchanged: Vec<String>,
}

/// A value change for a key present in both maps, including
/// value-presence transitions (`Some` to `None` and back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedVar {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}
