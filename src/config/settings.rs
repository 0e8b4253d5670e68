use crate::calendar::{DEFAULT_REQUEST_TIMEOUT, GITHUB_BASE_URL};
use core::time::Duration;

/// Default maximum number of developers in one request.
pub const DEFAULT_DEV_LIMIT: usize = 10;

/// Default lifetime of a cached month.
pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 60;

/// Cached months never live shorter than this.
pub const MIN_CACHE_TTL_MINUTES: u64 = 1;

/// Resolved runtime settings for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Host the calendar pages are fetched from.
    pub base_url: String,

    /// Timeout applied to each calendar request on its own.
    pub request_timeout: Duration,

    pub cache_ttl: Duration,

    /// Largest developer list a single request may name.
    pub dev_limit: usize,

    /// Developers the `*` entry expands to.
    pub roster: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: GITHUB_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_ttl: cache_ttl_from_minutes(DEFAULT_CACHE_TTL_MINUTES),
            dev_limit: DEFAULT_DEV_LIMIT,
            roster: Vec::new(),
        }
    }
}

/// Convert a configured TTL in minutes, raising anything below [`MIN_CACHE_TTL_MINUTES`].
#[must_use]
pub const fn cache_ttl_from_minutes(minutes: u64) -> Duration {
    let minutes = if minutes < MIN_CACHE_TTL_MINUTES {
        MIN_CACHE_TTL_MINUTES
    } else {
        minutes
    };
    Duration::from_secs(minutes.saturating_mul(60))
}
