//! In-memory response cache for catalog API calls.
//! Entries expire after a TTL; when full, the oldest insertion is evicted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::diagnostics::now_ms;

/// Cache entry with expiration
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: serde_json::Value,
    pub stored_at_ms: f64,
    pub ttl: Duration,
}

impl CacheEntry {
    pub fn new(payload: serde_json::Value, stored_at_ms: f64, ttl: Duration) -> Self {
        Self {
            payload,
            stored_at_ms,
            ttl,
        }
    }

    pub fn is_expired_at(&self, at_ms: f64) -> bool {
        at_ms - self.stored_at_ms > self.ttl.as_secs_f64() * 1000.0
    }
}

#[derive(Debug)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_json_at(key, now_ms())
    }

    pub fn get_json_at<T: DeserializeOwned>(&self, key: &str, at_ms: f64) -> Option<T> {
        let entry = self.entries.get(key).filter(|entry| !entry.is_expired_at(at_ms))?;
        serde_json::from_value(entry.payload.clone()).ok()
    }

    pub fn put_json<T: Serialize>(&mut self, key: String, value: &T, ttl: Duration) -> bool {
        self.put_json_at(key, value, ttl, now_ms())
    }

    pub fn put_json_at<T: Serialize>(
        &mut self,
        key: String,
        value: &T,
        ttl: Duration,
        at_ms: f64,
    ) -> bool {
        if ttl.is_zero() {
            return false;
        }
        let Ok(payload) = serde_json::to_value(value) else {
            return false;
        };

        self.clean_expired(at_ms);
        if self.entries.remove(&key).is_some() {
            self.order.retain(|existing| existing != &key);
        }

        while self.entries.len() >= self.max_entries {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }

        self.order.push_back(key.clone());
        self.entries
            .insert(key, CacheEntry::new(payload, at_ms, ttl));
        true
    }

    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.retain(|existing| existing != key);
            true
        } else {
            false
        }
    }

    pub fn clean_expired(&mut self, at_ms: f64) {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(at_ms))
            .map(|(key, _)| key.clone())
            .collect();

        for key in expired {
            self.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub mod keys {
    pub fn list(kind: &str, page: u32) -> String {
        format!("api:{kind}:v1:{page}")
    }

    pub fn item(kind: &str, slug: &str) -> String {
        format!("api:{kind}:v1:{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn entries_expire_after_ttl() {
        let mut cache = ResponseCache::new(4);
        assert!(cache.put_json_at("a".into(), &vec![1, 2, 3], Duration::from_secs(10), 0.0));

        assert_eq!(cache.get_json_at::<Vec<u32>>("a", 9_000.0), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_json_at::<Vec<u32>>("a", 10_001.0), None);
    }

    #[test]
    fn full_cache_evicts_oldest_insertion() {
        let mut cache = ResponseCache::new(2);
        cache.put_json_at("first".into(), &1u32, HOUR, 0.0);
        cache.put_json_at("second".into(), &2u32, HOUR, 1.0);
        cache.put_json_at("third".into(), &3u32, HOUR, 2.0);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_json_at::<u32>("first", 3.0), None);
        assert_eq!(cache.get_json_at::<u32>("third", 3.0), Some(3));
    }

    #[test]
    fn overwriting_a_key_refreshes_its_position() {
        let mut cache = ResponseCache::new(2);
        cache.put_json_at("a".into(), &1u32, HOUR, 0.0);
        cache.put_json_at("b".into(), &2u32, HOUR, 1.0);
        cache.put_json_at("a".into(), &10u32, HOUR, 2.0);
        cache.put_json_at("c".into(), &3u32, HOUR, 3.0);

        assert_eq!(cache.get_json_at::<u32>("a", 4.0), Some(10));
        assert_eq!(cache.get_json_at::<u32>("b", 4.0), None);
    }

    #[test]
    fn zero_ttl_is_not_stored() {
        let mut cache = ResponseCache::new(2);
        assert!(!cache.put_json_at("a".into(), &1u32, Duration::ZERO, 0.0));
        assert_eq!(cache.len(), 0);
    }
}
