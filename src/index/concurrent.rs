//! A fixed-bucket concurrent map, one independent mutex per bucket.
//!
//! Grounded in the reference implementation's `ConcurrentMap<Key, Value>`
//! (bucket-per-bucket locking, an `Access` operation into one slot,
//! `BuildOrdinaryMap` for a whole-map snapshot). Locking itself follows
//! `index-scheduler::index_scheduler`'s own convention of a plain
//! `std::sync::Mutex`/`RwLock` taken and unwrapped at each call site (see
//! e.g. its `processing_tasks.write().unwrap()`), rather than a
//! guard-mapping crate: `access` takes a closure instead of returning a
//! mapped guard, since nothing in the examined teacher code hands a guard
//! back across a call boundary.

use crate::core::types::DocId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// A key usable with `ShardedMap`: must say which bucket of `bucket_count`
/// buckets it belongs in. The sharded map's contract requires this mapping
/// to be a pure function of the key (see module docs on disjointness).
pub trait ShardKey: Eq + std::hash::Hash + Copy + Ord {
    fn bucket_index(&self, bucket_count: usize) -> usize;
}

struct Bucket<K, V> {
    mutex: Mutex<HashMap<K, V>>,
}

/// Fixed-`B`-bucket keyed map. Each bucket owns an independent mutex and an
/// ordinary `HashMap`; `snapshot` unions all buckets into one ordered map.
pub struct ShardedMap<K, V> {
    buckets: Vec<Bucket<K, V>>,
}

impl<K, V> ShardedMap<K, V>
where
    K: ShardKey,
    V: Default,
{
    /// `bucket_count` must be greater than zero.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "ShardedMap requires at least one bucket");
        let buckets = (0..bucket_count)
            .map(|_| Bucket { mutex: Mutex::new(HashMap::new()) })
            .collect();
        ShardedMap { buckets }
    }

    fn bucket_for(&self, key: &K) -> &Bucket<K, V> {
        &self.buckets[key.bucket_index(self.buckets.len())]
    }

    /// Locks the bucket owning `key`, default-initializing its slot on
    /// first access, and runs `f` against it before releasing the lock.
    pub fn access<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R {
        let mut map = self.bucket_for(&key).mutex.lock().unwrap();
        f(map.entry(key).or_insert_with(V::default))
    }

    /// Removes `key` if present. A no-op otherwise.
    pub fn erase(&self, key: K) {
        self.bucket_for(&key).mutex.lock().unwrap().remove(&key);
    }

    /// Unions every bucket's contents into one ordered map. Buckets are
    /// locked one at a time, in bucket order; since bucketing is a function
    /// of the key, the union is guaranteed to have disjoint keys per bucket.
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for bucket in &self.buckets {
            let map = bucket.mutex.lock().unwrap();
            for (key, value) in map.iter() {
                result.insert(*key, value.clone());
            }
        }
        result
    }
}

impl ShardKey for DocId {
    fn bucket_index(&self, bucket_count: usize) -> usize {
        (self.0 as u64 as usize) % bucket_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct Key(i64);

    impl ShardKey for Key {
        fn bucket_index(&self, bucket_count: usize) -> usize {
            (self.0 as u64 as usize) % bucket_count
        }
    }

    #[test]
    fn access_default_initializes_and_accumulates() {
        let map: ShardedMap<Key, f64> = ShardedMap::new(4);
        map.access(Key(7), |slot| *slot += 1.5);
        map.access(Key(7), |slot| *slot += 2.5);
        assert_eq!(map.access(Key(7), |slot| *slot), 4.0);
    }

    #[test]
    fn erase_removes_entry() {
        let map: ShardedMap<Key, f64> = ShardedMap::new(4);
        map.access(Key(1), |slot| *slot += 1.0);
        map.erase(Key(1));
        assert_eq!(map.access(Key(1), |slot| *slot), 0.0);
    }

    #[test]
    fn snapshot_unions_all_buckets() {
        let map: ShardedMap<Key, f64> = ShardedMap::new(4);
        for id in 0..10 {
            map.access(Key(id), |slot| *slot = id as f64);
        }
        let snapshot = map.snapshot();
        assert_eq!(snapshot.len(), 10);
        assert_eq!(snapshot[&Key(5)], 5.0);
    }

    #[test]
    fn concurrent_writers_on_distinct_keys_are_consistent() {
        use std::sync::Arc;
        use std::thread;

        let map: Arc<ShardedMap<Key, f64>> = Arc::new(ShardedMap::new(16));
        let mut handles = Vec::new();
        for id in 0..100 {
            let map = map.clone();
            handles.push(thread::spawn(move || {
                map.access(Key(id), |slot| *slot += 1.0);
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        let snapshot = map.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert!(snapshot.values().all(|v| *v == 1.0));
    }
}
