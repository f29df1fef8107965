//! Time-based cache with graceful refresh failure handling.

use chrono::{DateTime, Duration, Utc};
use std::fmt::Display;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: DateTime<Utc>,
}

/// A single-slot cache that refreshes expired data on demand
///
/// State is explicit: either nothing has been cached yet, or one value
/// with its expiry. A failing refresh serves the stale value instead of
/// propagating the error, so callers behind the cache keep working
/// through transient upstream failures. Not synchronized; intended for
/// single-threaded request handling.
#[derive(Debug, Clone)]
pub struct RefreshCache<T> {
    state: Option<CacheEntry<T>>,
}

impl<T> Default for RefreshCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RefreshCache<T> {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Whether a cached value exists and has not expired at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        matches!(&self.state, Some(entry) if now < entry.expires_at)
    }

    /// Drop any cached value, forcing the next access to refresh
    pub fn invalidate(&mut self) {
        self.state = None;
    }

    /// Return the cached value, refreshing it when expired
    ///
    /// A fresh value is returned untouched. On expiry `refresh` runs;
    /// success replaces the slot with a new expiry of `now + ttl`, while
    /// failure logs a warning and serves the stale value with its expiry
    /// unchanged, so the next call retries. `None` only when there is no
    /// value at all, stale or otherwise.
    pub fn get_with<E, F>(&mut self, now: DateTime<Utc>, ttl: Duration, refresh: F) -> Option<&T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        if !self.is_fresh(now) {
            match refresh() {
                Ok(data) => {
                    debug!("Cache refreshed, valid until {}", now + ttl);
                    self.state = Some(CacheEntry {
                        data,
                        expires_at: now + ttl,
                    });
                }
                Err(e) => {
                    if self.state.is_some() {
                        warn!("Cache refresh failed, serving stale data: {e}");
                    } else {
                        warn!("Cache refresh failed with nothing to fall back on: {e}");
                    }
                }
            }
        }
        self.state.as_ref().map(|entry| &entry.data)
    }
}
