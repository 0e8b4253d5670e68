use super::cache::{CacheKey, CacheStore};
use super::client::{CalendarClient, CalendarSource};
use super::{FetchError, MonthContributions, html};
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;

const LOG_TARGET: &str = "  provider";

/// One developer's month, and whether it came from GitHub (`fresh`) or the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub contributions: MonthContributions,
    pub fresh: bool,
}

/// Serves a developer's month from the cache, falling back to scraping GitHub.
#[derive(Debug)]
pub struct Provider<S = CalendarClient> {
    source: S,
    cache: Arc<dyn CacheStore>,
}

impl<S: CalendarSource> Provider<S> {
    #[must_use]
    pub fn new(source: S, cache: Arc<dyn CacheStore>) -> Self {
        Self { source, cache }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    /// Get `developer`'s contributions for the month containing `date`.
    ///
    /// A live cache entry is returned as-is unless `force` is set. Otherwise the calendar page
    /// for `date`'s year is fetched and scraped, and the result replaces the cache entry.
    /// Nothing is cached when the fetch fails.
    pub async fn fetch(&self, developer: &str, date: NaiveDate, force: bool) -> Result<Fetched, FetchError> {
        let key = CacheKey::new(developer, date);

        if force {
            log::debug!(target: LOG_TARGET, "Refresh forced for {key}, bypassing cache");
        } else if let Some(contributions) = self.cache.load(&key, Utc::now()) {
            return Ok(Fetched {
                contributions,
                fresh: false,
            });
        }

        let from = date.with_ordinal(1).unwrap_or(date);
        let page = self.source.fetch_calendar(developer, from).await?;

        let contributions = html::scrape_month(&page, date.year(), date.month());
        self.cache.save(key, contributions.clone(), Utc::now());

        Ok(Fetched {
            contributions,
            fresh: true,
        })
    }
}
