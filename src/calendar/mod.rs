//! Contribution-calendar retrieval
//!
//! This module turns a list of GitHub developers and a date into day-by-day contribution counts
//! for the month containing that date.
//!
//! # Implementation Model
//!
//! - [`html`] parses the HTML calendar page GitHub serves at
//!   `/users/{developer}/contributions` into a [`MonthContributions`] map.
//! - [`CalendarSource`] fetches those pages; [`CalendarClient`] does it over HTTP with a
//!   per-request timeout.
//! - [`CacheStore`] holds recently scraped months for a short TTL. [`MemoryCache`] is the
//!   in-process implementation.
//! - [`Provider`] serves one developer's month, consulting the cache before the network.
//! - [`Collector`] runs one provider fetch per developer concurrently and either returns every
//!   result or the failure of the earliest developer in the list.

mod cache;
mod client;
mod collector;
mod contribution;
mod fetch_error;
mod provider;
pub mod html;

#[cfg(test)]
mod stub_source;

pub use cache::{CacheEntry, CacheKey, CacheStore, MemoryCache};
pub use client::{CalendarClient, CalendarSource, DEFAULT_REQUEST_TIMEOUT, GITHUB_BASE_URL, MAX_LOGIN_LEN, is_valid_login};
pub use collector::Collector;
pub use contribution::{Contribution, DevContributions, MonthContributions, MonthReport, month_total};
pub use fetch_error::FetchError;
pub use provider::{Fetched, Provider};
