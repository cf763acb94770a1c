//! The provider capability interface and the fallback chain.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A generated image reference.
///
/// `image_url` is either a direct URL the browser can fetch or an inline
/// `data:` URI. Never empty on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub image_url: String,
}

/// One way of turning a prompt into an image.
///
/// Implementations issue at most one outbound call per invocation and must
/// map every failure mode into [`ProviderError`]; nothing here panics or
/// leaks a raw transport error upward.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short identifier used in logs (`"pollinations"`, `"public-url"`, ...).
    fn name(&self) -> &'static str;

    /// Generate an image for `prompt`.
    ///
    /// `seed` only adds output variety; it carries no correctness weight.
    async fn generate(&self, prompt: &str, seed: u64) -> Result<ImageResult, ProviderError>;
}

/// Ordered provider attempts.
///
/// Walks its providers front to back, logging each failure, and returns
/// the first success. One pass, no retries, no backoff: a chain whose
/// last entry is infallible (the public-URL variant) always succeeds.
/// When every provider fails, the LAST error is returned so the API layer
/// can distinguish a provider-reported rejection from transport trouble;
/// an empty chain yields [`ProviderError::Exhausted`].
pub struct FallbackChain {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    /// Try each provider in order until one succeeds.
    pub async fn generate(&self, prompt: &str, seed: u64) -> Result<ImageResult, ProviderError> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.generate(prompt, seed).await {
                Ok(result) => {
                    tracing::debug!(provider = provider.name(), "Image generated");
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        timeout = e.is_timeout(),
                        prompt,
                        "Image provider attempt failed",
                    );
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(ProviderError::Exhausted))
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that always fails with an API error.
    struct AlwaysFails {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageProvider for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        async fn generate(&self, _: &str, _: u64) -> Result<ImageResult, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::Api {
                status: 503,
                body: "overloaded".into(),
            })
        }
    }

    /// Provider that always succeeds with a fixed URL.
    struct AlwaysSucceeds;

    #[async_trait]
    impl ImageProvider for AlwaysSucceeds {
        fn name(&self) -> &'static str {
            "always-succeeds"
        }

        async fn generate(&self, _: &str, _: u64) -> Result<ImageResult, ProviderError> {
            Ok(ImageResult {
                image_url: "https://img.example/ok.jpg".into(),
            })
        }
    }

    #[tokio::test]
    async fn first_success_wins() {
        let chain = FallbackChain::new(vec![Box::new(AlwaysSucceeds), Box::new(AlwaysSucceeds)]);
        let result = chain.generate("koi fish", 7).await.unwrap();
        assert_eq!(result.image_url, "https://img.example/ok.jpg");
    }

    #[tokio::test]
    async fn failure_advances_to_next_provider() {
        let failing = AlwaysFails {
            calls: AtomicUsize::new(0),
        };
        let chain = FallbackChain::new(vec![Box::new(failing), Box::new(AlwaysSucceeds)]);
        let result = chain.generate("koi fish", 7).await.unwrap();
        assert_eq!(result.image_url, "https://img.example/ok.jpg");
    }

    #[tokio::test]
    async fn exhausted_chain_surfaces_last_error() {
        let chain = FallbackChain::new(vec![Box::new(AlwaysFails {
            calls: AtomicUsize::new(0),
        })]);
        let err = chain.generate("koi fish", 7).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn empty_chain_is_exhausted() {
        let chain = FallbackChain::new(vec![]);
        let err = chain.generate("koi fish", 7).await.unwrap_err();
        assert!(matches!(err, ProviderError::Exhausted));
    }
}
