//! A short-lived, in-process cache of scraped months.
//!
//! [`CacheStore`] is the seam the [`Provider`](super::Provider) talks to; [`MemoryCache`] is the
//! mutex-guarded map used by default. Expiry is lazy: stale entries stay in the map and are
//! ignored on lookup until a fresh fetch overwrites them.

use super::MonthContributions;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use core::fmt::{Debug, Display, Formatter};
use core::time::Duration;
use std::collections::HashMap;
use std::sync::Mutex;

const LOG_TARGET: &str = "     cache";

/// Identifies one developer's month.
///
/// The developer is lowercased so that `Alice` and `alice` share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    developer: String,
    month: u32,
    year: i32,
}

impl CacheKey {
    #[must_use]
    pub fn new(developer: &str, date: NaiveDate) -> Self {
        Self {
            developer: developer.to_lowercase(),
            month: date.month(),
            year: date.year(),
        }
    }

    #[must_use]
    pub fn developer(&self) -> &str {
        &self.developer
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}-{:02}", self.developer, self.year, self.month)
    }
}

/// A scraped month together with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub saved_at: DateTime<Utc>,
    pub data: MonthContributions,
}

/// Storage for scraped months.
///
/// Implementations must be safe to share between concurrent fetches. Each call is expected to
/// be short; no lock may be held across calls.
pub trait CacheStore: Send + Sync + Debug {
    /// Returns the cached month if it is younger than the store's TTL at `now`.
    fn load(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<MonthContributions>;

    /// Stores `data` under `key`, replacing whatever was there.
    fn save(&self, key: CacheKey, data: MonthContributions, now: DateTime<Utc>);
}

/// The default [`CacheStore`]: a `HashMap` behind a `Mutex`.
#[derive(Debug)]
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("lock not poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn load(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<MonthContributions> {
        let entry = {
            let entries = self.entries.lock().expect("lock not poisoned");
            entries.get(key).cloned()
        };

        let Some(entry) = entry else {
            log::debug!(target: LOG_TARGET, "Cache miss for {key}");
            return None;
        };

        // Future timestamps (clock skew) count as fresh
        let age = now.signed_duration_since(entry.saved_at);
        if age.num_seconds() < 0 {
            log::debug!(target: LOG_TARGET, "Cache timestamp is in the future for {key} (clock skew detected), treating as fresh");
            return Some(entry.data);
        }

        let age = age.to_std().unwrap_or(Duration::MAX);
        if age >= self.ttl {
            log::debug!(
                target: LOG_TARGET,
                "Cache expired for {key} (age: {:.1} min, TTL: {:.1} min)",
                age.as_secs_f64() / 60.0,
                self.ttl.as_secs_f64() / 60.0
            );
            return None;
        }

        log::debug!(target: LOG_TARGET, "Cache hit for {key} (age: {:.1} min)", age.as_secs_f64() / 60.0);
        Some(entry.data)
    }

    fn save(&self, key: CacheKey, data: MonthContributions, now: DateTime<Utc>) {
        log::debug!(target: LOG_TARGET, "Caching {} day(s) for {key}", data.len());

        let entry = CacheEntry { saved_at: now, data };
        let _ = self.entries.lock().expect("lock not poisoned").insert(key, entry);
    }
}
