use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, log_enabled, Level::Debug};
use parking_lot::Mutex;
use tokio::time::{interval, Instant};

pub struct Cache<K, V> {
    map: Mutex<HashMap<K, Item<V>>>,
    ttl: Duration,
}

#[derive(Debug)]
struct Item<V> {
    data: V,
    seen: Instant,
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
            ttl: ttl,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now     = Instant::now();
        let mut map = self.map.lock();

        match map.get(key) {
            Some(item) if now.saturating_duration_since(item.seen) < self.ttl => {
                return Some(item.data.clone());
            },
            Some(..) => (),
            None     => return None,
        }

        map.remove(key);

        None
    }

    pub fn insert(&self, key: K, data: V) {
        self.map.lock().insert(key, Item {
            data: data,
            seen: Instant::now(),
        });
    }

    pub fn compact(&self) {
        let now = Instant::now();
        let ttl = self.ttl;
        self.map.lock().retain(|_, item| {
            now.saturating_duration_since(item.seen) < ttl
        });
    }

    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub async fn reap<K: Eq + Hash, V: Clone>(cache: Arc<Cache<K, V>>, period: Duration) {
    let mut interval = interval(period);

    loop {
        interval.tick().await;

        let before = cache.len();
        cache.compact();

        if log_enabled!(Debug) {
            let after = cache.len();
            debug!("reaped {} expired cache entries, {} remain", before.saturating_sub(after), after);
        }
    }
}
