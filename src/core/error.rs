use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// API-level failures (unknown asset, rate limiting, ...) are not represented here:
/// the server reports them inside an ordinary JSON body, which is returned to the
/// caller untouched. See [`Envelope`](crate::Envelope) for a typed view of such bodies.
#[derive(Debug, Error)]
pub enum MessariError {
    /// An error occurred during an HTTP request (connection failure, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The API key cannot be sent as an HTTP header value.
    #[error("Invalid API key header value: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl MessariError {
    /// Returns `true` if the request failed because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
