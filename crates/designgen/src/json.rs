//! Provider variant that answers with a single JSON object.
//!
//! Success is `{"success": true, "imageUrl": "..."}`. Any other shape is
//! an error, preferring the provider's own `error` message when present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{ImageProvider, ImageResult};

/// Response envelope from the JSON generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    success: bool,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
    error: Option<String>,
}

/// Interpret a decoded response envelope.
fn interpret(response: GenerateResponse) -> Result<String, ProviderError> {
    match response {
        GenerateResponse {
            success: true,
            image_url: Some(url),
            ..
        } => Ok(url),
        GenerateResponse {
            error: Some(message),
            ..
        } => Err(ProviderError::Rejected(message)),
        _ => Err(ProviderError::Rejected(
            "provider returned no image".to_string(),
        )),
    }
}

/// Client for a JSON-responding generation endpoint.
pub struct JsonProvider {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl JsonProvider {
    pub fn new(
        endpoint: &str,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| ProviderError::InvalidUrl(endpoint.to_string()))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            model,
        })
    }
}

#[async_trait]
impl ImageProvider for JsonProvider {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn generate(&self, prompt: &str, seed: u64) -> Result<ImageResult, ProviderError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "model": self.model,
            "seed": seed,
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
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

        let decoded = response.json::<GenerateResponse>().await?;
        let image_url = interpret(decoded)?;
        Ok(ImageResult { image_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> GenerateResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn success_with_url_is_ok() {
        let url = interpret(decode(
            r#"{"success": true, "imageUrl": "https://img.example/a.jpg"}"#,
        ))
        .unwrap();
        assert_eq!(url, "https://img.example/a.jpg");
    }

    #[test]
    fn provider_error_message_is_preserved() {
        let err = interpret(decode(r#"{"success": false, "error": "nsfw prompt"}"#)).unwrap_err();
        assert!(err.to_string().contains("nsfw prompt"));
    }

    #[test]
    fn success_without_url_is_an_error() {
        let err = interpret(decode(r#"{"success": true}"#)).unwrap_err();
        assert!(matches!(err, ProviderError::Rejected(_)));
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let err = interpret(decode(r#"{"ok": 1}"#)).unwrap_err();
        assert!(matches!(err, ProviderError::Rejected(_)));
    }
}
