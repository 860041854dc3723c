use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source for staleness checks, injectable so window expiry is
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    fetched_at: Instant,
    body: Value,
}

/// Time-windowed response cache keyed by the exact resolved request
/// (endpoint path + query string).
///
/// Purely a load optimization: a hit may return a body up to one
/// staleness window old, never anything else. Concurrent callers
/// racing on a cold key each fetch and each store; the map stays
/// consistent and the cost is at most one redundant backend call.
pub struct RevalidationCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl RevalidationCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Return the cached body for `key` if it was stored within
    /// `max_age` of now.
    pub fn get(&self, key: &str, max_age: Duration) -> Option<Value> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        let entry = entries.get(key)?;

        if self.clock.now().duration_since(entry.fetched_at) < max_age {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    /// Store a body for `key`, resetting its staleness window.
    pub fn put(&self, key: String, body: Value) {
        let fetched_at = self.clock.now();
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(key, CacheEntry { fetched_at, body });
    }
}
