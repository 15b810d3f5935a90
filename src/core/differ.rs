//! Pure comparison of two environment maps

use crate::model::{ChangedVar, DiffResult, EnvMap};

/// Compare two environment maps and classify every key.
///
/// A key is added iff present in B and absent in A, removed iff the
/// reverse. Keys present in both are changed when the values differ by
/// exact `Option<String>` equality (presence transitions count) and
/// unchanged otherwise. All four buckets come out sorted by key;
/// `changed` is sorted by key as well, never by value.
pub fn compare(source_a: &EnvMap, source_b: &EnvMap) -> DiffResult {
    let mut result = DiffResult::default();

    // EnvMap iterates keys in lexical order, so the buckets are built
    // already sorted.
    for key in source_b.keys() {
        if !source_a.contains_key(key) {
            result.added.push(key.clone());
        }
    }

    for (key, value_a) in source_a.iter() {
        match source_b.get(key) {
            None => result.removed.push(key.clone()),
            Some(value_b) if value_a != value_b => result.changed.push(ChangedVar {
                key: key.clone(),
                from: value_a.clone(),
                to: value_b.clone(),
            }),
            Some(_) => result.unchanged.push(key.clone()),
        }
    }

    result
}

/// Keys of `baseline` that are not present in `target` at all.
///
/// Only key existence matters; values are ignored. Empty when the
/// baseline is empty or the target is a superset. Sorted ascending.
pub fn missing_keys(target: &EnvMap, baseline: &EnvMap) -> Vec<String> {
    baseline
        .keys()
        .filter(|key| !target.contains_key(key))
        .cloned()
        .collect()
}
