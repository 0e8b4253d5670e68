use super::client::{CalendarClient, CalendarSource, is_valid_login};
use super::{DevContributions, FetchError, Fetched, MemoryCache, MonthReport, Provider, month_total};
use crate::config::Settings;
use chrono::{Datelike, NaiveDate};
use futures_util::future::{AbortHandle, abortable};
use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};
use std::sync::Arc;

const LOG_TARGET: &str = " collector";

/// Gathers a month of contributions for a whole list of developers.
#[derive(Debug)]
pub struct Collector<S = CalendarClient> {
    provider: Provider<S>,
    dev_limit: usize,
}

impl Collector<CalendarClient> {
    /// Build a collector that scrapes GitHub, with a fresh in-memory cache.
    pub fn from_settings(settings: &Settings) -> crate::Result<Self> {
        let client = CalendarClient::new(settings.base_url.as_str(), settings.request_timeout)?;
        let cache = Arc::new(MemoryCache::new(settings.cache_ttl));
        Ok(Self::new(Provider::new(client, cache), settings.dev_limit))
    }
}

impl<S: CalendarSource> Collector<S> {
    #[must_use]
    pub const fn new(provider: Provider<S>, dev_limit: usize) -> Self {
        Self { provider, dev_limit }
    }

    #[must_use]
    pub const fn provider(&self) -> &Provider<S> {
        &self.provider
    }

    #[must_use]
    pub const fn dev_limit(&self) -> usize {
        self.dev_limit
    }

    /// Validate the developer list, then collect the month containing `date` for all of them.
    ///
    /// An empty list, one longer than the configured limit, or one naming something that cannot
    /// be a GitHub login is rejected before any request is made.
    pub async fn month_report(&self, date: NaiveDate, developers: &[String], force: bool) -> Result<MonthReport, FetchError> {
        if developers.is_empty() {
            return Err(FetchError::EmptyDeveloperList);
        }

        if developers.len() > self.dev_limit {
            return Err(FetchError::DeveloperLimitExceeded { limit: self.dev_limit });
        }

        if let Some(developer) = developers.iter().find(|d| !is_valid_login(d)) {
            return Err(FetchError::InvalidDeveloper {
                developer: developer.clone(),
            });
        }

        let contributions = self.fetch_all(developers, date, force).await?;
        Ok(MonthReport { date, contributions })
    }

    /// Fetch every developer concurrently.
    ///
    /// All fetches are started together. If any fail, the error reported is the one of the
    /// earliest failing developer in `developers`, whatever order the fetches finish in. Fetches
    /// after a known failure are aborted; fetches before it are still awaited, since one of them
    /// may fail too. On success the map is keyed by the identifiers exactly as given.
    pub async fn fetch_all(&self, developers: &[String], date: NaiveDate, force: bool) -> Result<DevContributions, FetchError> {
        let (mut pending, handles): (FuturesUnordered<_>, Vec<AbortHandle>) = developers
            .iter()
            .enumerate()
            .map(|(index, developer)| {
                let (fetch, handle) = abortable(self.provider.fetch(developer, date, force));
                (fetch.map(move |outcome| (index, outcome)), handle)
            })
            .unzip();

        let mut fetched: Vec<Option<Fetched>> = developers.iter().map(|_| None).collect();
        let mut failure: Option<(usize, FetchError)> = None;

        while let Some((index, outcome)) = pending.next().await {
            // Aborted
            let Ok(result) = outcome else {
                continue;
            };

            match result {
                Ok(month) => fetched[index] = Some(month),
                Err(e) => {
                    if failure.as_ref().is_none_or(|(earliest, _)| index < *earliest) {
                        for handle in &handles[index + 1..] {
                            handle.abort();
                        }
                        failure = Some((index, e));
                    }
                }
            }

            if let Some((earliest, _)) = &failure
                && fetched[..*earliest].iter().all(Option::is_some)
            {
                break;
            }
        }

        if let Some((_, e)) = failure {
            log::info!(target: LOG_TARGET, "Abandoning collection for {}-{:02}: {e}", date.year(), date.month());
            return Err(e);
        }

        let mut contributions = DevContributions::new();
        for (developer, month) in developers.iter().zip(fetched) {
            let Some(month) = month else {
                continue;
            };

            log::info!(
                target: LOG_TARGET,
                "{developer}: {} contribution(s) in {}-{:02} ({})",
                month_total(&month.contributions),
                date.year(),
                date.month(),
                if month.fresh { "fresh" } else { "cached" }
            );

            let _ = contributions.insert(developer.clone(), month.contributions);
        }

        Ok(contributions)
    }
}
