//! First-occurrence-wins deduplication.

use std::collections::HashSet;
use std::hash::Hash;

/// Drop every item whose key was already seen, keeping the original order.
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key_of(item)))
        .collect()
}
