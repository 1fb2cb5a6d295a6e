use std::collections::HashMap;
use std::hash::Hash;

/// Counts items per key. Items for which `key` returns `None` are skipped.
pub fn count_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> HashMap<K, u32>
where
    K: Eq + Hash,
    F: Fn(T) -> Option<K>,
{
    let mut counts = HashMap::new();
    for item in items {
        if let Some(k) = key(item) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_key_empty() {
        let counts = count_by_key(Vec::<i64>::new(), Some);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_count_by_key_skips_none() {
        let counts = count_by_key([1, 2, 2, 3, 3, 3], |n| (n != 2).then_some(n));
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), None);
        assert_eq!(counts.get(&3), Some(&3));
    }
}
