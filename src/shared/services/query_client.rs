//! Keyed cache for fetched data, shared through Dioxus context.
//!
//! Entries are fresh for `QueryConfig::stale_time`; a stale entry is dropped
//! on the next lookup. Nothing populates the cache yet.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::QueryConfig;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_cache_evicted, log_cache_lookup};

/// Cached value with the time it was stored
#[derive(Debug, Clone)]
struct CachedQuery {
    value: Value,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QueryClient {
    config: QueryConfig,
    entries: Arc<DashMap<String, CachedQuery>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl QueryClient {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            entries: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.set_at(key, value, Utc::now());
    }

    pub fn set_at(&self, key: impl Into<String>, value: Value, now: DateTime<Utc>) {
        self.entries.insert(key.into(), CachedQuery { value, fetched_at: now });
    }

    /// Fresh value for `key`, if any
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        let fresh = match self.entries.get(key) {
            Some(entry) => {
                let age = now - entry.fetched_at;
                if age < self.config.stale_time() {
                    Some(entry.value.clone())
                } else {
                    // Release the shard lock before removing
                    drop(entry);
                    self.entries.remove(key);
                    log_cache_evicted(key, age.num_seconds());
                    None
                }
            }
            None => None,
        };
        log_cache_lookup(key, fresh.is_some());
        fresh
    }

    /// Fresh value decoded into `T`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_as_at(key, Utc::now())
    }

    pub fn get_as_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Result<Option<T>> {
        match self.get_at(key, now) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| AppError::CacheDecode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// True when there is no entry or the entry has outlived the stale time
    pub fn is_stale(&self, key: &str) -> bool {
        self.is_stale_at(key, Utc::now())
    }

    pub fn is_stale_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.entries
            .get(key)
            .map(|entry| now - entry.fetched_at >= self.config.stale_time())
            .unwrap_or(true)
    }

    /// Whether regaining window focus should trigger a refetch
    pub fn refetches_on_focus(&self) -> bool {
        self.config.refetch_on_window_focus
    }

    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_starts_empty_with_default_config() {
        let client = QueryClient::default();
        assert!(client.is_empty());
        assert_eq!(client.config().stale_time(), Duration::minutes(5));
        assert!(!client.refetches_on_focus());
    }

    #[test]
    fn test_entry_fresh_within_stale_time() {
        let client = QueryClient::default();
        client.set_at("tenants", json!([{"name": "Acme Corp"}]), t0());

        let later = t0() + Duration::minutes(4) + Duration::seconds(59);
        assert_eq!(client.get_at("tenants", later), Some(json!([{"name": "Acme Corp"}])));
        assert!(!client.is_stale_at("tenants", later));
    }

    #[test]
    fn test_entry_evicted_once_stale() {
        let client = QueryClient::default();
        client.set_at("tenants", json!(1), t0());

        let later = t0() + Duration::minutes(5);
        assert!(client.is_stale_at("tenants", later));
        assert_eq!(client.get_at("tenants", later), None);
        assert!(client.is_empty());
    }

    #[test]
    fn test_oversized_stale_time_keeps_entries_fresh() {
        for secs in [u64::MAX, 10_000_000_000_000_000] {
            let client = QueryClient::new(QueryConfig {
                stale_time_secs: secs,
                refetch_on_window_focus: false,
            });
            client.set_at("k", json!(1), t0());
            assert_eq!(client.get_at("k", t0()), Some(json!(1)));
            assert_eq!(client.get_at("k", t0() + Duration::hours(23)), Some(json!(1)));
            assert_eq!(client.get_at("k", t0() + Duration::days(1)), None);
        }
    }

    #[test]
    fn test_missing_key_is_stale() {
        let client = QueryClient::default();
        assert!(client.is_stale_at("nothing", t0()));
        assert_eq!(client.get_at("nothing", t0()), None);
    }

    #[test]
    fn test_get_as_decodes_and_reports_mismatch() {
        let client = QueryClient::default();
        client.set_at("count", json!(12), t0());

        let count: Option<u32> = client.get_as_at("count", t0()).unwrap();
        assert_eq!(count, Some(12));

        let err = client.get_as_at::<String>("count", t0()).unwrap_err();
        assert!(matches!(err, AppError::CacheDecode { ref key, .. } if key == "count"));

        let missing: Option<u32> = client.get_as_at("absent", t0()).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let client = QueryClient::default();
        client.set_at("a", json!(1), t0());
        client.set_at("b", json!(2), t0());

        assert!(client.invalidate("a"));
        assert!(!client.invalidate("a"));
        assert_eq!(client.len(), 1);

        client.clear();
        assert!(client.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let client = QueryClient::default();
        let handle = client.clone();
        handle.set_at("shared", json!(true), t0());
        assert_eq!(client.get_at("shared", t0()), Some(json!(true)));
        assert_eq!(client, handle);
        assert_ne!(client, QueryClient::default());
    }
}
