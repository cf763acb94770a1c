//! Error type shared by all provider variants.

/// Errors from an image-provider attempt.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The provider's event stream ended without a usable result, or
    /// reported an error fragment.
    #[error("Provider stream error: {0}")]
    Stream(String),

    /// The provider answered 2xx but rejected the generation.
    #[error("Provider rejected the request: {0}")]
    Rejected(String),

    /// A provider endpoint URL from configuration failed to parse.
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),

    /// Every provider in the fallback chain failed.
    #[error("All image providers failed")]
    Exhausted,
}

impl ProviderError {
    /// Whether this error came from a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
