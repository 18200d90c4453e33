//! LRU Cache Store Module
//!
//! Fixed-capacity memoization store combining a HashMap with an arena-backed
//! recency list for O(1) get/insert and deterministic LRU eviction.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::lru::{NodeId, RecencyList};
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == Stored Entry ==
/// A stored value together with its handle in the recency list.
#[derive(Debug)]
struct Entry<V> {
    value: V,
    node: NodeId,
}

// == LRU Cache ==
/// Fixed-capacity associative store with least-recently-used eviction.
///
/// The cache is a pure memoization store: it never computes values, only
/// holds what callers insert. Reads refresh recency exactly like writes, so
/// the entry evicted when the cache is full is always the one whose last
/// access (get or insert) is furthest in the past.
///
/// The map and the recency list are kept in lock-step: every key in the map
/// has exactly one node in the list and vice versa.
///
/// Not internally synchronized. `get` mutates recency state, so concurrent
/// callers must wrap the cache in a single lock guarding both `get` and
/// `insert`, or keep one instance per worker.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to value-and-node mapping
    entries: HashMap<K, Entry<V>>,
    /// Recency order over stored keys
    order: RecencyList<K>,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero. The
    /// capacity is fixed for the lifetime of the cache.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Looks up a key, refreshing its recency on a hit.
    ///
    /// Returns `None` on a miss; a miss has no effect beyond the miss
    /// counter. On a hit the key becomes the most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let node = match self.entries.get(key) {
            Some(entry) => entry.node,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        self.order.touch(node);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Insert ==
    /// Stores a key-value pair, marking the key most recently used.
    ///
    /// If the key is already present its value is replaced in place and no
    /// eviction happens. If the key is new and the cache is full, exactly
    /// one entry - the least recently used - is evicted first.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            let node = entry.node;
            self.order.touch(node);
            return;
        }

        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.order.pop_back() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!("evicted least recently used entry");
            }
        }

        let node = self.order.push_front(key.clone());
        self.entries.insert(key, Entry { value, node });
    }

    // == Contains ==
    /// Checks presence without touching recency or counters.
    #[allow(dead_code)]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Peek LRU ==
    /// Returns the key next in line for eviction, without touching it.
    #[allow(dead_code)]
    pub fn peek_lru(&self) -> Option<&K> {
        self.order.back()
    }

    // == Clear ==
    /// Empties the cache and resets statistics.
    ///
    /// Capacity is preserved; afterwards the cache behaves exactly like a
    /// freshly constructed one.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::new();
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new() {
        let cache: LruCache<String, i32> = LruCache::new(10).unwrap();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 10);
    }

    #[test]
    fn test_cache_zero_capacity_rejected() {
        let result: Result<LruCache<String, i32>> = LruCache::new(0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = LruCache::new(10).unwrap();

        cache.insert("key1".to_string(), 1);

        assert_eq!(cache.get(&"key1".to_string()), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_missing() {
        let mut cache: LruCache<String, i32> = LruCache::new(10).unwrap();
        assert_eq!(cache.get(&"nope".to_string()), None);
    }

    #[test]
    fn test_cache_miss_is_idempotent() {
        let mut cache = LruCache::new(2).unwrap();
        cache.insert("a".to_string(), 1);

        for _ in 0..5 {
            assert_eq!(cache.get(&"missing".to_string()), None);
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&1));
    }

    #[test]
    fn test_cache_overwrite_in_place() {
        let mut cache = LruCache::new(1).unwrap();

        cache.insert("a".to_string(), 1);
        cache.insert("a".to_string(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&2));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_cache_eviction_order() {
        let mut cache = LruCache::new(3).unwrap();

        cache.insert("k1".to_string(), 1);
        cache.insert("k2".to_string(), 2);
        cache.insert("k3".to_string(), 3);

        // Cache is full; inserting k4 evicts k1 (oldest)
        cache.insert("k4".to_string(), 4);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&"k1".to_string()), None);
        assert_eq!(cache.get(&"k2".to_string()), Some(&2));
        assert_eq!(cache.get(&"k3".to_string()), Some(&3));
        assert_eq!(cache.get(&"k4".to_string()), Some(&4));
    }

    #[test]
    fn test_cache_get_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        // Reading a makes b the least recently used
        assert_eq!(cache.get(&"a".to_string()), Some(&1));

        cache.insert("c".to_string(), 3);

        assert_eq!(cache.get(&"a".to_string()), Some(&1));
        assert_eq!(cache.get(&"b".to_string()), None);
        assert_eq!(cache.get(&"c".to_string()), Some(&3));
    }

    #[test]
    fn test_cache_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();

        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&1));

        // Every new distinct key evicts the sole entry
        cache.insert("b".to_string(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.get(&"b".to_string()), Some(&2));
    }

    #[test]
    fn test_cache_capacity_bound() {
        let mut cache = LruCache::new(4).unwrap();

        for i in 0..20 {
            cache.insert(format!("key{i}"), i);
            assert!(cache.len() <= 4);
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_cache_peek_lru() {
        let mut cache = LruCache::new(3).unwrap();

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        assert_eq!(cache.peek_lru(), Some(&"a".to_string()));

        // Peeking must not refresh recency
        cache.insert("c".to_string(), 3);
        cache.insert("d".to_string(), 4);
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    #[test]
    fn test_cache_contains_does_not_touch() {
        let mut cache = LruCache::new(2).unwrap();

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        assert!(cache.contains(&"a".to_string()));

        // a stays least recently used despite the contains check
        cache.insert("c".to_string(), 3);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cache_clear_resets_fully() {
        let mut cache = LruCache::new(2).unwrap();

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.get(&"a".to_string());

        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.get(&"b".to_string()), None);
        assert_eq!(cache.capacity(), 2);

        // Behaves like a fresh cache afterwards
        cache.insert("c".to_string(), 3);
        cache.insert("d".to_string(), 4);
        cache.insert("e".to_string(), 5);
        assert_eq!(cache.get(&"c".to_string()), None);
        assert_eq!(cache.get(&"d".to_string()), Some(&4));
        assert_eq!(cache.get(&"e".to_string()), Some(&5));
    }

    #[test]
    fn test_cache_stats_accounting() {
        let mut cache = LruCache::new(2).unwrap();

        cache.insert("a".to_string(), 1);
        cache.get(&"a".to_string()); // hit
        cache.get(&"x".to_string()); // miss
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3); // evicts a

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_cache_non_string_keys() {
        let mut cache: LruCache<u64, &str> = LruCache::new(2).unwrap();

        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"two"));
        assert_eq!(cache.get(&3), Some(&"three"));
    }
}
