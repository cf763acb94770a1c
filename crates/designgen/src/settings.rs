//! Provider selection and chain construction from configuration.

use std::time::Duration;

use crate::error::ProviderError;
use crate::json::JsonProvider;
use crate::pollinations::{PollinationsProvider, PublicUrlProvider, DEFAULT_TIMEOUT_SECS};
use crate::provider::{FallbackChain, ImageProvider};
use crate::sse::SseProvider;

/// Which provider integration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// GET image endpoint; authenticated call inlines bytes as a data URI
    /// and falls back to the public URL.
    Pollinations,
    /// POST endpoint answering with an SSE body.
    Sse,
    /// POST endpoint answering with one JSON object.
    Json,
}

impl ProviderKind {
    /// Parse a configuration value. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pollinations" => Some(Self::Pollinations),
            "sse" => Some(Self::Sse),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Everything needed to build the provider chain.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Endpoint base URL.
    pub base_url: String,
    /// API key for the authenticated call. `None` skips straight to the
    /// public URL for the pollinations kind.
    pub api_key: Option<String>,
    /// Model name sent by the SSE/JSON variants.
    pub model: String,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Pollinations,
            base_url: crate::pollinations::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: "flux".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Build the fallback chain for the configured provider kind.
///
/// The pollinations chain always ends in the infallible public-URL
/// provider, so a timed-out or failed authenticated call degrades to a URL
/// the browser fetches itself instead of an error.
pub fn build_chain(settings: &ProviderSettings) -> Result<FallbackChain, ProviderError> {
    let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

    match settings.kind {
        ProviderKind::Pollinations => {
            if let Some(key) = settings.api_key.clone().filter(|k| !k.is_empty()) {
                providers.push(Box::new(PollinationsProvider::new(
                    &settings.base_url,
                    key,
                    settings.timeout(),
                )?));
            }
            providers.push(Box::new(PublicUrlProvider::new(&settings.base_url)?));
        }
        ProviderKind::Sse => {
            providers.push(Box::new(SseProvider::new(
                &settings.base_url,
                settings.model.clone(),
                settings.timeout(),
            )?));
        }
        ProviderKind::Json => {
            providers.push(Box::new(JsonProvider::new(
                &settings.base_url,
                settings.model.clone(),
                settings.timeout(),
            )?));
        }
    }

    Ok(FallbackChain::new(providers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing() {
        assert_eq!(ProviderKind::parse("pollinations"), Some(ProviderKind::Pollinations));
        assert_eq!(ProviderKind::parse(" SSE "), Some(ProviderKind::Sse));
        assert_eq!(ProviderKind::parse("json"), Some(ProviderKind::Json));
        assert_eq!(ProviderKind::parse("dalle"), None);
    }

    #[test]
    fn pollinations_without_key_has_only_public_url() {
        let chain = build_chain(&ProviderSettings::default()).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn pollinations_with_key_chains_both() {
        let settings = ProviderSettings {
            api_key: Some("sk-test".to_string()),
            ..ProviderSettings::default()
        };
        let chain = build_chain(&settings).unwrap();
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn empty_key_counts_as_no_key() {
        let settings = ProviderSettings {
            api_key: Some(String::new()),
            ..ProviderSettings::default()
        };
        let chain = build_chain(&settings).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn sse_kind_builds_single_provider() {
        let settings = ProviderSettings {
            kind: ProviderKind::Sse,
            base_url: "https://gen.example/api/generate".to_string(),
            ..ProviderSettings::default()
        };
        let chain = build_chain(&settings).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn invalid_base_url_fails_chain_construction() {
        let settings = ProviderSettings {
            base_url: "not a url".to_string(),
            ..ProviderSettings::default()
        };
        assert!(build_chain(&settings).is_err());
    }
}
