//! In-memory keyed record storage
//!
//! Every registry keeps its records in a [`RecordStore`]. Each mutation runs
//! under the store's write lock, so a read-check-write sequence on a record
//! is observed atomically by concurrent callers.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Keyed record store behind a read/write lock
#[derive(Debug)]
pub struct RecordStore<K, V> {
    records: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for RecordStore<K, V> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> RecordStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the record
    pub fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    /// Stores a record, returning the one it replaced
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write().insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Runs `f` against the record while holding the write lock
    ///
    /// Returns `None` when the key is absent. `f` must only mutate the record
    /// on the success path; the store does not roll back partial changes.
    pub fn update<R, E>(
        &self,
        key: &K,
        f: impl FnOnce(&mut V) -> Result<R, E>,
    ) -> Option<Result<R, E>> {
        let mut records = self.write();
        records.get_mut(key).map(f)
    }

    // Poisoned locks are recovered: update closures mutate only after every check passes.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Monotonic identifier allocator
///
/// The first call to [`Sequence::allocate`] returns 1. Values are never reused.
#[derive(Debug, Default)]
pub struct Sequence {
    last: AtomicU64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last value handed out, or 0 if none
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_update_missing_key() {
        let store: RecordStore<u64, String> = RecordStore::new();
        let result = store.update(&1, |v| {
            v.push('x');
            Ok::<_, ()>(())
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_update_error_leaves_record() {
        let store = RecordStore::new();
        store.insert(1u64, 10i64);

        let result = store.update(&1, |v| if *v > 5 { Err("too big") } else { *v += 1; Ok(()) });
        assert_eq!(result, Some(Err("too big")));
        assert_eq!(store.get(&1), Some(10));
    }

    #[test]
    fn test_insert_replaces() {
        let store = RecordStore::new();
        assert_eq!(store.insert("temperature", 30), None);
        assert_eq!(store.insert("temperature", 40), Some(30));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sequence_concurrent_allocation_is_unique() {
        let seq = Arc::new(Sequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                thread::spawn(move || (0..100).map(|_| seq.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(seq.current(), 800);
    }
}
