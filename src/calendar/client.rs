//! Retrieval of contribution-calendar pages from GitHub.

use super::FetchError;
use chrono::NaiveDate;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use reqwest::Url;

const LOG_TARGET: &str = "    client";

const USER_AGENT: &str = concat!("contrib-calendar/", env!("CARGO_PKG_VERSION"));

/// The public GitHub web host.
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest developer name accepted.
pub const MAX_LOGIN_LEN: usize = 64;

/// Returns `true` if `developer` could be a GitHub login.
///
/// Logins are ASCII letters, digits and hyphens; managed accounts add an `_suffix`.
#[must_use]
pub fn is_valid_login(developer: &str) -> bool {
    !developer.is_empty()
        && developer.len() <= MAX_LOGIN_LEN
        && developer.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Somewhere calendar pages can be fetched from.
pub trait CalendarSource: Send + Sync {
    /// Fetch the raw calendar page of `developer`, covering the year that starts at `from`.
    fn fetch_calendar(&self, developer: &str, from: NaiveDate) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches calendar pages over HTTP, one timeout-bounded GET per call.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CalendarClient {
    /// Create a client against `base_url` (normally [`GITHUB_BASE_URL`]).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).into_app_err_with(|| format!("invalid base URL '{base_url}'"))?;
        if parsed.cannot_be_a_base() {
            bail!("base URL '{base_url}' cannot carry a path");
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?;

        Ok(Self { client, base_url: parsed })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// The page URL for `developer`'s calendar starting at `from`.
    ///
    /// `developer` always lands in a single, percent-encoded path segment.
    #[must_use]
    pub fn calendar_url(&self, developer: &str, from: NaiveDate) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            let _ = segments.pop_if_empty().extend(["users", developer, "contributions"]);
        }

        let _ = url
            .query_pairs_mut()
            .clear()
            .append_pair("from", &from.format("%Y-%m-%d").to_string());
        url
    }
}

impl CalendarSource for CalendarClient {
    async fn fetch_calendar(&self, developer: &str, from: NaiveDate) -> Result<String, FetchError> {
        let url = self.calendar_url(developer, from);
        let network = |source: reqwest::Error| FetchError::Network {
            developer: developer.to_string(),
            source,
        };

        log::info!(target: LOG_TARGET, "Querying GitHub for the contribution calendar of '{developer}'");

        let resp = self.client.get(url.clone()).send().await.map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            log::info!(target: LOG_TARGET, "Calendar request for '{developer}' returned HTTP {status}");
            return Err(FetchError::HttpStatus {
                developer: developer.to_string(),
                status,
            });
        }

        let body = resp.text().await.map_err(network)?;

        log::debug!(target: LOG_TARGET, "Fetched {} bytes from '{url}'", body.len());

        Ok(body)
    }
}
