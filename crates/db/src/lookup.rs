//! Helpers for resolving references with batched secondary lookups.
//!
//! Repositories load a page of rows, collect the foreign keys they carry,
//! fetch every referenced row with a single `WHERE key = ANY($1)` query and
//! then stitch the results together through a key-indexed map.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Collect the distinct, non-null keys from an iterator of optional keys.
///
/// The output is sorted, which keeps the bound array stable across calls.
pub fn distinct_keys<K, I>(keys: I) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = Option<K>>,
{
    keys.into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Index loaded rows by their key.
pub fn index_by<K, V, F>(values: Vec<V>, key: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: Fn(&V) -> K,
{
    values.into_iter().map(|v| (key(&v), v)).collect()
}

/// Resolve an optional foreign key against an index, cloning the hit.
///
/// A key with no matching row resolves to `None`.
pub fn resolve<K, V>(index: &HashMap<K, V>, key: Option<&K>) -> Option<V>
where
    K: Eq + Hash,
    V: Clone,
{
    key.and_then(|k| index.get(k)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keys_drops_nulls_and_duplicates() {
        let keys = distinct_keys(vec![Some(3_i64), None, Some(1), Some(3), Some(2), None]);
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn distinct_keys_of_nothing_is_empty() {
        let keys: Vec<String> = distinct_keys(Vec::<Option<String>>::new());
        assert!(keys.is_empty());
    }

    #[test]
    fn index_by_and_resolve() {
        let index = index_by(vec![(1_i64, "a"), (2, "b")], |(id, _)| *id);

        assert_eq!(resolve(&index, Some(&2)), Some((2, "b")));
        assert_eq!(resolve(&index, Some(&9)), None);
        assert_eq!(resolve(&index, None), None);
    }
}
