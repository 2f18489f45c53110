use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered 401 or 403. The body is never read; the caller
    /// must navigate to the login entry point.
    #[error("Authentication required (HTTP {status})")]
    AuthRequired { status: u16 },

    /// Network-level failure: connect, TLS, or mid-body I/O.
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but was not the JSON shape we expect.
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL cannot be combined with an API path.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBase { url: String, message: String },
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::AuthRequired { .. })
    }
}
