use serde::Serialize;

/// Message carried by every successful response.
pub const OK_MESSAGE: &str = "OK";

/// Body of responses that report an outcome without data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            message: OK_MESSAGE.to_string(),
        }
    }
}

/// Body of responses that carry data; `data` is `null` when `message` describes a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataResult<T> {
    pub data: Option<T>,
    pub message: String,
}

impl<T> DataResult<T> {
    #[must_use]
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            message: OK_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
        }
    }
}

/// Payload of the version endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
}
