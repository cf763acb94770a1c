//! Provider variant that answers with a Server-Sent-Events body.
//!
//! The whole body is read, split into lines, and each `data: `-prefixed
//! line is parsed as an independent JSON fragment. Lines that fail to
//! parse are ignored; the LAST fragment reporting `status: "complete"` is
//! authoritative, and a fragment reporting `status: "error"` short-circuits
//! with the provider's own message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{ImageProvider, ImageResult};

/// One parsed event fragment. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SseFragment {
    status: Option<String>,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// Extract the authoritative image URL from an SSE payload.
///
/// Pure function so the line protocol is testable without a socket.
pub fn parse_sse_payload(payload: &str) -> Result<String, ProviderError> {
    let mut last_complete: Option<String> = None;

    for line in payload.lines() {
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let Ok(fragment) = serde_json::from_str::<SseFragment>(data.trim()) else {
            // Malformed fragments (including keep-alives) are skipped.
            continue;
        };

        match fragment.status.as_deref() {
            Some("error") => {
                let message = fragment
                    .error
                    .or(fragment.message)
                    .unwrap_or_else(|| "provider reported an error".to_string());
                return Err(ProviderError::Stream(message));
            }
            Some("complete") => {
                if let Some(url) = fragment.image_url {
                    last_complete = Some(url);
                }
            }
            _ => {}
        }
    }

    last_complete.ok_or_else(|| {
        ProviderError::Stream("stream ended without a complete fragment".to_string())
    })
}

/// Client for an SSE-responding generation endpoint.
pub struct SseProvider {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl SseProvider {
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
impl ImageProvider for SseProvider {
    fn name(&self) -> &'static str {
        "sse"
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

        let payload = response.text().await?;
        let image_url = parse_sse_payload(&payload)?;
        Ok(ImageResult { image_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_complete_fragment_wins() {
        let payload = "\
data: {\"status\":\"queued\"}\n\
data: {\"status\":\"complete\",\"imageUrl\":\"https://img.example/first.jpg\"}\n\
data: {\"status\":\"complete\",\"imageUrl\":\"https://img.example/second.jpg\"}\n";
        let url = parse_sse_payload(payload).unwrap();
        assert_eq!(url, "https://img.example/second.jpg");
    }

    #[test]
    fn error_fragment_short_circuits() {
        let payload = "\
data: {\"status\":\"error\",\"error\":\"model overloaded\"}\n\
data: {\"status\":\"complete\",\"imageUrl\":\"https://img.example/late.jpg\"}\n";
        let err = parse_sse_payload(payload).unwrap_err();
        match err {
            ProviderError::Stream(msg) => assert_eq!(msg, "model overloaded"),
            other => panic!("expected Stream error, got {other:?}"),
        }
    }

    #[test]
    fn error_fragment_falls_back_to_message_field() {
        let payload = "data: {\"status\":\"error\",\"message\":\"quota exceeded\"}\n";
        let err = parse_sse_payload(payload).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn malformed_fragments_are_ignored() {
        let payload = "\
data: not-json-at-all\n\
: keep-alive comment\n\
data: {\"status\":\"complete\",\"imageUrl\":\"https://img.example/ok.jpg\"}\n";
        let url = parse_sse_payload(payload).unwrap();
        assert_eq!(url, "https://img.example/ok.jpg");
    }

    #[test]
    fn stream_without_complete_fragment_is_an_error() {
        let payload = "data: {\"status\":\"queued\"}\ndata: {\"status\":\"running\"}\n";
        let err = parse_sse_payload(payload).unwrap_err();
        assert!(matches!(err, ProviderError::Stream(_)));
    }

    #[test]
    fn complete_without_url_does_not_count() {
        let payload = "data: {\"status\":\"complete\"}\n";
        assert!(parse_sse_payload(payload).is_err());
    }

    #[test]
    fn non_data_lines_are_skipped() {
        let payload = "\
event: progress\n\
data: {\"status\":\"complete\",\"imageUrl\":\"https://img.example/ok.jpg\"}\n\n";
        assert!(parse_sse_payload(payload).is_ok());
    }
}
