//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base URL or a path built from it is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Check if the backend reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }

    /// Check if this is a server-side (5xx) failure.
    pub fn is_server_error(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if (500..600).contains(status))
    }

    /// Check if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}
