use reqwest::StatusCode;

/// Why a contributions request could not be served.
///
/// None of these are retried; any one of them fails the whole request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Empty devs list")]
    EmptyDeveloperList,

    #[error("Devs list exceeds limit: {limit}")]
    DeveloperLimitExceeded { limit: usize },

    /// The name cannot be a GitHub login, so no calendar URL is built for it.
    #[error("Invalid developer name: '{developer}'")]
    InvalidDeveloper { developer: String },

    /// Connection failure, timeout, or a body that could not be read.
    #[error("could not fetch contributions for '{developer}': {source}")]
    Network {
        developer: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("contributions request for '{developer}' failed with HTTP {status}")]
    HttpStatus { developer: String, status: StatusCode },
}

impl FetchError {
    /// Returns `true` for errors caused by the caller's input rather than by GitHub.
    #[must_use]
    pub const fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::EmptyDeveloperList | Self::DeveloperLimitExceeded { .. } | Self::InvalidDeveloper { .. }
        )
    }
}
