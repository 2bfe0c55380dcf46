//! Generic TTL memoization
//!
//! Several display rows can ask for the same variable inside one refresh
//! cycle; the cache guarantees at most one upstream request per variable
//! per TTL window. The utility is deliberately decoupled from any
//! refresh mechanism: callers pick the TTL (typically a bit under the
//! poll interval) and the cache only looks at wall-clock age.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// Thread-safe map from key to value with a fixed time-to-live.
///
/// Reads are concurrent-safe and writes are single-writer-per-key via
/// the interior mutex. Expired entries are dropped lazily on access.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the cached value for `key` if it has not expired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `value`, stamping it with the current time.
    pub fn insert(&self, key: K, value: V) {
        self.lock().insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every expired entry. Useful for long-lived caches with a
    /// churning key set; correctness never depends on calling this.
    pub fn purge_expired(&self) {
        let mut entries = self.lock();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<K, Entry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            log::warn!("TTL cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_fresh_entry_is_returned() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(60));
        cache.insert("CORE_TEMP".to_string(), 7);
        assert_eq!(cache.get("CORE_TEMP"), Some(7));
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_millis(10));
        cache.insert("CORE_TEMP".to_string(), 7);
        sleep(Duration::from_millis(25));
        assert_eq!(cache.get("CORE_TEMP"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_overwrites_and_restamps() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_millis(50));
        cache.insert("CORE_TEMP".to_string(), 1);
        sleep(Duration::from_millis(30));
        cache.insert("CORE_TEMP".to_string(), 2);
        sleep(Duration::from_millis(30));
        // 60ms after the first insert but only 30ms after the second
        assert_eq!(cache.get("CORE_TEMP"), Some(2));
    }

    #[test]
    fn test_purge_expired() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_millis(10));
        cache.insert("OLD".to_string(), 1);
        sleep(Duration::from_millis(25));
        cache.insert("NEW".to_string(), 2);
        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("NEW"), Some(2));
    }

    #[test]
    fn test_missing_key() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(1));
        assert_eq!(cache.get("NOT_THERE"), None);
    }
}
