//! Session-scoped cache for remote queries.
//!
//! One cache instance is owned by the application session and shared by
//! every screen through an `Arc`; screens reference the same entry when
//! their keys are equal. Entries are replaced wholesale on refetch, never
//! edited in place, so concurrent readers always observe a complete result.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::{debug, info};
use tokio::sync::{Mutex, RwLock};

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::query::key::QueryKey;

/// Lifecycle state of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Pending,
    Success,
    Error,
}

struct CacheEntry {
    status: QueryStatus,
    data: Option<Arc<dyn Any + Send + Sync>>,
    error: Option<ApiError>,
    fetched_at: Instant,
    /// Explicitly invalidated; refetch on next access regardless of age.
    stale: bool,
    /// Bumped by invalidation. A fetch started under an older generation
    /// stores its result as stale so the next access refetches.
    generation: u64,
}

impl CacheEntry {
    fn pending() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            fetched_at: Instant::now(),
            stale: false,
            generation: 0,
        }
    }

    fn is_fresh(&self, stale_after: Duration) -> bool {
        self.status == QueryStatus::Success
            && !self.stale
            && self.fetched_at.elapsed() <= stale_after
    }
}

pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    /// Per-key fetch locks: at most one request in flight per key. A second
    /// fetch for the same key parks here and then reads the stored result.
    locks: DashMap<QueryKey, Arc<Mutex<()>>>,
    stale_after: Duration,
    max_age: Duration,
    last_cleanup: RwLock<Instant>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_windows(
            Duration::from_secs(CONFIG.stale_after_secs),
            Duration::from_secs(CONFIG.cache_max_age_secs),
        )
    }

    pub fn with_windows(stale_after: Duration, max_age: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            locks: DashMap::new(),
            stale_after,
            max_age,
            last_cleanup: RwLock::new(Instant::now()),
        }
    }

    /// Fetch the query behind `key`, reusing a fresh cached result when one
    /// exists and deduplicating concurrent fetches for the same key.
    ///
    /// The fetcher is only invoked when no fresh entry exists after the
    /// per-key lock is acquired, so identical concurrent calls produce
    /// exactly one network request.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, ApiError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(data) = self.peek::<T>(key) {
            debug!("cache hit for {}", key);
            return Ok(data);
        }

        let lock = self
            .locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        // A fetch that was in flight while we waited may have filled the
        // entry already.
        if let Some(data) = self.peek::<T>(key) {
            debug!("cache hit for {} after in-flight fetch", key);
            return Ok(data);
        }

        let generation = self.begin_fetch(key);
        debug!("fetching {}", key);

        match fetcher().await {
            Ok(data) => {
                let data = Arc::new(data);
                self.store_success(key, data.clone(), generation);
                self.maybe_cleanup().await;
                Ok(data)
            }
            Err(error) => {
                self.store_error(key, error.clone());
                Err(error)
            }
        }
    }

    /// A fresh cached value for `key`, if any. Never triggers a fetch.
    pub fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entry = self.entries.get(key)?;
        if !entry.is_fresh(self.stale_after) {
            return None;
        }
        entry
            .data
            .as_ref()
            .and_then(|data| data.clone().downcast::<T>().ok())
    }

    /// Current status of `key`'s entry, or `None` before first access.
    pub fn status(&self, key: &QueryKey) -> Option<QueryStatus> {
        self.entries.get(key).map(|entry| entry.status)
    }

    /// The stored error for `key`, if its last fetch failed.
    pub fn error(&self, key: &QueryKey) -> Option<ApiError> {
        self.entries
            .get(key)
            .filter(|entry| entry.status == QueryStatus::Error)
            .and_then(|entry| entry.error.clone())
    }

    /// Mark every entry of the given resource namespace stale. The next
    /// fetch for any such key re-issues the network call regardless of the
    /// staleness window.
    pub fn invalidate_resource(&self, resource: &str) {
        let mut marked = 0usize;
        for mut entry in self.entries.iter_mut() {
            if entry.key().is_resource(resource) {
                entry.stale = true;
                entry.generation += 1;
                marked += 1;
            }
        }
        if marked > 0 {
            debug!("invalidated {} entries for resource {}", marked, resource);
        }
    }

    /// Mark one exact entry stale.
    pub fn invalidate_entry(&self, key: &QueryKey) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.stale = true;
            entry.generation += 1;
            debug!("invalidated {}", key);
        }
    }

    /// Drop every entry. Used on sign-out: nothing cached belongs to the
    /// next session.
    pub fn clear(&self) {
        self.entries.clear();
        self.locks.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record the start of a fetch and return the entry's generation at
    /// that moment. An invalidation arriving while the request is in flight
    /// bumps the generation, and the mismatch keeps the late result stale.
    fn begin_fetch(&self, key: &QueryKey) -> u64 {
        let mut entry = self.entries.entry(key.clone()).or_insert_with(CacheEntry::pending);
        entry.status = QueryStatus::Pending;
        entry.generation
    }

    fn store_success<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        data: Arc<T>,
        generation: u64,
    ) {
        let current_generation = self
            .entries
            .get(key)
            .map(|entry| entry.generation)
            .unwrap_or(generation);
        let superseded = current_generation != generation;

        self.entries.insert(
            key.clone(),
            CacheEntry {
                status: QueryStatus::Success,
                data: Some(data),
                error: None,
                fetched_at: Instant::now(),
                stale: superseded,
                generation: current_generation,
            },
        );

        if superseded {
            debug!("stored superseded result for {}, kept stale", key);
        }
    }

    fn store_error(&self, key: &QueryKey, error: ApiError) {
        self.entries.insert(
            key.clone(),
            CacheEntry {
                status: QueryStatus::Error,
                data: None,
                error: Some(error),
                fetched_at: Instant::now(),
                stale: false,
                generation: 0,
            },
        );
    }

    /// Evict entries past the max-age window if enough time has passed
    /// since the last sweep.
    async fn maybe_cleanup(&self) {
        const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

        let should_cleanup = {
            let last = self.last_cleanup.read().await;
            last.elapsed() >= CLEANUP_INTERVAL
        };

        if should_cleanup {
            let mut last = self.last_cleanup.write().await;
            // Double-check after acquiring the write lock
            if last.elapsed() >= CLEANUP_INTERVAL {
                self.evict_expired();
                *last = Instant::now();
            }
        }
    }

    fn evict_expired(&self) {
        let before = self.entries.len();
        let max_age = self.max_age;

        self.entries.retain(|_, entry| {
            entry.status == QueryStatus::Pending || entry.fetched_at.elapsed() < max_age
        });
        self.locks
            .retain(|key, _| self.entries.contains_key(key));

        let removed = before - self.entries.len();
        if removed > 0 {
            info!(
                "query cache cleanup: removed {} expired entries, {} remaining",
                removed,
                self.entries.len()
            );
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
