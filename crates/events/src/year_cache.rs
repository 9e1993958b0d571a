//! Per-year event cache with versioned keys and a freshness window.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::EventCache;
use crate::error::EventsError;
use crate::event::Event;

/// Prefix of every key written by [`YearCache`]. Bump to orphan old entries.
pub const CACHE_VERSION: &str = "v1";

/// Default freshness window for cached years.
pub const DEFAULT_TTL_HOURS: i64 = 6;

const SOURCE_KEY_CHARS: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedYear {
    events: Vec<Event>,
    cached_at: DateTime<Utc>,
}

/// Builds the cache key for `year` and a set of source ids.
///
/// Ids are sorted first so that selection order does not matter. Each id
/// contributes its last ten characters, prefixed by the id count; an empty
/// selection yields `none`.
pub fn cache_key<S: AsRef<str>>(year: i32, source_ids: &[S]) -> String {
    let mut ids: Vec<&str> = source_ids.iter().map(AsRef::as_ref).collect();
    ids.sort_unstable();
    let sources = if ids.is_empty() {
        "none".to_string()
    } else {
        let tails: String = ids
            .iter()
            .map(|id| {
                let n = id.chars().count();
                id.chars().skip(n.saturating_sub(SOURCE_KEY_CHARS)).collect::<String>()
            })
            .collect();
        format!("{}-{tails}", ids.len())
    };
    format!("{CACHE_VERSION}-events-year-{year}-{sources}")
}

/// Event cache keyed by year and source selection, over an injected backend.
#[derive(Debug, Clone)]
pub struct YearCache<C> {
    backend: C,
    ttl: TimeDelta,
}

impl<C: EventCache> YearCache<C> {
    /// Wraps `backend` with the default six-hour freshness window.
    pub fn new(backend: C) -> Self {
        Self {
            backend,
            ttl: TimeDelta::hours(DEFAULT_TTL_HOURS),
        }
    }

    /// Sets the freshness window.
    pub fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the freshness window.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the backend.
    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Returns the cached events for `year`, or `None` on a miss.
    ///
    /// Entries older than the TTL at `now`, and entries that fail to parse,
    /// are misses.
    pub fn load<S: AsRef<str>>(
        &self,
        year: i32,
        source_ids: &[S],
        now: DateTime<Utc>,
    ) -> Option<Vec<Event>> {
        let key = cache_key(year, source_ids);
        let raw = self.backend.get(&key)?;
        let cached: CachedYear = match serde_json::from_str(&raw) {
            Ok(c) => c,
            Err(e) => {
                debug!(%key, error = %e, "discarding unreadable cache entry");
                return None;
            }
        };
        if now - cached.cached_at > self.ttl {
            debug!(%key, cached_at = %cached.cached_at, "cache entry expired");
            return None;
        }
        debug!(%key, n_events = cached.events.len(), "cache hit");
        Some(cached.events)
    }

    /// Stores `events` for `year` with timestamp `now`.
    ///
    /// # Errors
    ///
    /// Propagates serialization and backend write failures.
    pub fn store<S: AsRef<str>>(
        &mut self,
        year: i32,
        source_ids: &[S],
        events: &[Event],
        now: DateTime<Utc>,
    ) -> Result<(), EventsError> {
        let key = cache_key(year, source_ids);
        let payload = CachedYear {
            events: events.to_vec(),
            cached_at: now,
        };
        let json = serde_json::to_string(&payload)?;
        self.backend.set(&key, json)?;
        debug!(%key, n_events = events.len(), "cached events");
        Ok(())
    }

    /// Removes the entry for `year` and the given sources.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn clear_year<S: AsRef<str>>(
        &mut self,
        year: i32,
        source_ids: &[S],
    ) -> Result<(), EventsError> {
        self.backend.remove(&cache_key(year, source_ids))
    }

    /// Removes every entry written under the current [`CACHE_VERSION`].
    ///
    /// Returns how many entries were removed.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn clear_all(&mut self) -> Result<usize, EventsError> {
        let prefix = format!("{CACHE_VERSION}-");
        let keys: Vec<String> = self
            .backend
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(&prefix))
            .collect();
        for key in &keys {
            self.backend.remove(key)?;
        }
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Event> {
        vec![Event::new(
            "e1",
            "https://example.com/work.ics",
            "Review",
            "2024-06-03T10:00:00Z",
            "2024-06-03T11:00:00Z",
        )]
    }

    #[test]
    fn key_without_sources() {
        let none: [&str; 0] = [];
        assert_eq!(cache_key(2024, &none), "v1-events-year-2024-none");
    }

    #[test]
    fn key_uses_sorted_tails() {
        let key = cache_key(2024, &["https://b.example/team.ics", "https://a.example/home.ics"]);
        assert_eq!(key, "v1-events-year-2024-2-e/home.icse/team.ics");
    }

    #[test]
    fn key_is_order_independent() {
        assert_eq!(
            cache_key(2025, &["x", "y"]),
            cache_key(2025, &["y", "x"])
        );
    }

    #[test]
    fn short_ids_are_used_whole() {
        assert_eq!(cache_key(2024, &["abc"]), "v1-events-year-2024-1-abc");
    }

    #[test]
    fn store_then_load() {
        let mut cache = YearCache::new(MemoryCache::new());
        let ids = ["https://example.com/work.ics"];
        cache.store(2024, &ids, &sample(), t0()).unwrap();
        let loaded = cache.load(2024, &ids, t0() + TimeDelta::hours(1)).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let mut cache = YearCache::new(MemoryCache::new());
        let ids = ["cal"];
        cache.store(2024, &ids, &sample(), t0()).unwrap();
        assert!(cache.load(2024, &ids, t0() + TimeDelta::hours(6)).is_some());
        assert!(
            cache
                .load(2024, &ids, t0() + TimeDelta::hours(6) + TimeDelta::seconds(1))
                .is_none()
        );
    }

    #[test]
    fn custom_ttl() {
        let mut cache = YearCache::new(MemoryCache::new()).with_ttl(TimeDelta::minutes(5));
        let ids = ["cal"];
        cache.store(2024, &ids, &sample(), t0()).unwrap();
        assert!(cache.load(2024, &ids, t0() + TimeDelta::minutes(10)).is_none());
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let mut backend = MemoryCache::new();
        backend
            .set(&cache_key(2024, &["cal"]), "{not json".to_string())
            .unwrap();
        let cache = YearCache::new(backend);
        assert!(cache.load(2024, &["cal"], t0()).is_none());
    }

    #[test]
    fn other_selection_is_a_miss() {
        let mut cache = YearCache::new(MemoryCache::new());
        cache.store(2024, &["a"], &sample(), t0()).unwrap();
        assert!(cache.load(2024, &["b"], t0()).is_none());
        assert!(cache.load(2025, &["a"], t0()).is_none());
    }

    #[test]
    fn clear_year_removes_only_that_entry() {
        let mut cache = YearCache::new(MemoryCache::new());
        cache.store(2024, &["a"], &sample(), t0()).unwrap();
        cache.store(2025, &["a"], &sample(), t0()).unwrap();
        cache.clear_year(2024, &["a"]).unwrap();
        assert!(cache.load(2024, &["a"], t0()).is_none());
        assert!(cache.load(2025, &["a"], t0()).is_some());
    }

    #[test]
    fn clear_all_leaves_foreign_keys() {
        let mut backend = MemoryCache::new();
        backend.set("settings", "{}".to_string()).unwrap();
        let mut cache = YearCache::new(backend);
        cache.store(2024, &["a"], &sample(), t0()).unwrap();
        cache.store(2025, &["b"], &sample(), t0()).unwrap();
        assert_eq!(cache.clear_all().unwrap(), 2);
        assert_eq!(cache.backend().keys(), vec!["settings".to_string()]);
    }
}
