//! Id-keyed table backing each collection

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

struct Row<T> {
    /// Insertion order, breaks ties between equal timestamps.
    seq: u64,
    value: T,
}

pub(crate) struct Table<T> {
    rows: DashMap<String, Row<T>>,
    next_seq: AtomicU64,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub(crate) fn insert(&self, id: String, value: T) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.rows.insert(id, Row { seq, value });
    }

    pub(crate) fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|row| row.value.clone())
    }

    /// Mutate a row in place and return the new value. The shard lock is
    /// released before returning, so callers may touch other tables after.
    pub(crate) fn update<F>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut row = self.rows.get_mut(id)?;
        f(&mut row.value);
        Some(row.value.clone())
    }

    pub(crate) fn remove(&self, id: &str) -> Option<T> {
        self.rows.remove(id).map(|(_, row)| row.value)
    }

    /// Earliest inserted row matching `pred`.
    pub(crate) fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| pred(&row.value))
            .min_by_key(|row| row.seq)
            .map(|row| row.value.clone())
    }

    /// Matching rows in no particular order.
    pub(crate) fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| pred(&row.value))
            .map(|row| row.value.clone())
            .collect()
    }

    /// Matching rows ordered by `key` descending, later inserts first on ties.
    pub(crate) fn newest_first<P, K, F>(&self, pred: P, key: F) -> Vec<T>
    where
        P: Fn(&T) -> bool,
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut rows: Vec<(K, u64, T)> = self
            .rows
            .iter()
            .filter(|row| pred(&row.value))
            .map(|row| (key(&row.value), row.seq, row.value.clone()))
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        rows.into_iter().map(|(_, _, value)| value).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let table: Table<u32> = Table::new();

        table.insert("a".to_string(), 1);
        assert_eq!(table.get("a"), Some(1));
        assert_eq!(table.get("missing"), None);

        assert_eq!(table.update("a", |v| *v += 10), Some(11));
        assert_eq!(table.update("missing", |v| *v += 10), None);

        assert_eq!(table.remove("a"), Some(11));
        assert_eq!(table.remove("a"), None);
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_newest_first_breaks_ties_by_insertion() {
        let table: Table<(u8, &str)> = Table::new();
        table.insert("1".to_string(), (1, "first"));
        table.insert("2".to_string(), (1, "second"));
        table.insert("3".to_string(), (0, "oldest"));
        table.insert("4".to_string(), (2, "newest"));

        let ordered: Vec<&str> = table
            .newest_first(|_| true, |v| v.0)
            .into_iter()
            .map(|v| v.1)
            .collect();
        assert_eq!(ordered, vec!["newest", "second", "first", "oldest"]);
    }

    #[test]
    fn test_find_returns_earliest_match() {
        let table: Table<(&str, u8)> = Table::new();
        table.insert("z".to_string(), ("dup", 1));
        table.insert("a".to_string(), ("dup", 2));
        table.insert("m".to_string(), ("other", 3));

        assert_eq!(table.find(|v| v.0 == "dup"), Some(("dup", 1)));
        assert_eq!(table.filter(|v| v.0 == "dup").len(), 2);
        assert!(table.find(|v| v.0 == "none").is_none());
    }
}
