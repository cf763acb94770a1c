//! Pollinations-style image endpoint clients.
//!
//! Two variants share the same URL shape:
//!
//! - [`PollinationsProvider`] calls the endpoint with a bearer key, reads
//!   the image bytes, and inlines them as a base64 data URI so the key
//!   never reaches the browser.
//! - [`PublicUrlProvider`] builds the unauthenticated public URL and
//!   returns it without any network call. It cannot fail, which makes it
//!   the natural last link of a fallback chain.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error::ProviderError;
use crate::provider::{ImageProvider, ImageResult};

/// Default public image endpoint.
pub const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";

/// Requested output resolution (square).
pub const IMAGE_DIMENSION: u32 = 1024;

/// Default request timeout. Image synthesis routinely takes over a minute.
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Content type assumed when the provider omits one.
const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// Build the image URL: `{base}/prompt/{prompt}?width=&height=&seed=&nologo=true`.
///
/// The prompt lands in a path segment, so `Url` percent-encodes it for us.
fn image_url(base: &Url, prompt: &str, seed: u64) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ProviderError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push("prompt")
        .push(prompt);
    url.query_pairs_mut()
        .append_pair("width", &IMAGE_DIMENSION.to_string())
        .append_pair("height", &IMAGE_DIMENSION.to_string())
        .append_pair("seed", &seed.to_string())
        .append_pair("nologo", "true");
    Ok(url)
}

/// Normalize a `Content-Type` header value, dropping parameters.
fn response_content_type(header: Option<&str>) -> &str {
    header
        .map(|v| v.split(';').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Encode image bytes as an inline `data:` URI.
fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", BASE64.encode(bytes))
}

// ---------------------------------------------------------------------------
// Authenticated provider
// ---------------------------------------------------------------------------

/// Authenticated client for the image endpoint.
pub struct PollinationsProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl PollinationsProvider {
    /// Build a client with the given endpoint, key, and request timeout.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ProviderError::InvalidUrl(base_url.to_string()))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl ImageProvider for PollinationsProvider {
    fn name(&self) -> &'static str {
        "pollinations"
    }

    async fn generate(&self, prompt: &str, seed: u64) -> Result<ImageResult, ProviderError> {
        let url = image_url(&self.base_url, prompt, seed)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Capture the content type before consuming the body.
        let content_type = response_content_type(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        )
        .to_string();

        let bytes = response.bytes().await?;

        Ok(ImageResult {
            image_url: data_uri(&content_type, &bytes),
        })
    }
}

// ---------------------------------------------------------------------------
// Public-URL provider
// ---------------------------------------------------------------------------

/// Keyless variant: hands the browser a public URL to fetch itself.
#[derive(Debug)]
pub struct PublicUrlProvider {
    base_url: Url,
}

impl PublicUrlProvider {
    pub fn new(base_url: &str) -> Result<Self, ProviderError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ProviderError::InvalidUrl(base_url.to_string()))?;
        Ok(Self { base_url })
    }
}

#[async_trait]
impl ImageProvider for PublicUrlProvider {
    fn name(&self) -> &'static str {
        "public-url"
    }

    async fn generate(&self, prompt: &str, seed: u64) -> Result<ImageResult, ProviderError> {
        let url = image_url(&self.base_url, prompt, seed)?;
        Ok(ImageResult {
            image_url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn image_url_encodes_prompt_and_params() {
        let url = image_url(&base(), "dragon on shoulder, bold lines", 42).unwrap();
        let s = url.to_string();
        assert!(s.starts_with("https://image.pollinations.ai/prompt/"));
        assert!(s.contains("dragon%20on%20shoulder"));
        assert!(s.contains("width=1024"));
        assert!(s.contains("height=1024"));
        assert!(s.contains("seed=42"));
        assert!(s.contains("nologo=true"));
    }

    #[test]
    fn content_type_strips_parameters() {
        assert_eq!(response_content_type(Some("image/png; charset=binary")), "image/png");
        assert_eq!(response_content_type(Some("image/webp")), "image/webp");
    }

    #[test]
    fn content_type_defaults_to_jpeg() {
        assert_eq!(response_content_type(None), "image/jpeg");
        assert_eq!(response_content_type(Some("")), "image/jpeg");
    }

    #[test]
    fn data_uri_has_expected_shape() {
        let uri = data_uri("image/png", b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[tokio::test]
    async fn public_url_provider_never_touches_the_network() {
        let provider = PublicUrlProvider::new(DEFAULT_BASE_URL).unwrap();
        let result = provider.generate("koi fish", 7).await.unwrap();
        assert!(result.image_url.contains("koi%20fish"));
        assert!(result.image_url.contains("seed=7"));
    }

    #[test]
    fn invalid_base_url_rejected() {
        let err = PublicUrlProvider::new("not a url").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));
    }
}
