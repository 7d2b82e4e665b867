//! Google Gemini `generateContent` client.
//!
//! - Image goes inline as base64 `inline_data` next to the text prompt.
//! - API key travels in the `x-goog-api-key` header.
//! - Response text is every `text` part of `candidates[0]`, concatenated.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::interface::{VisionError, VisionInterface};
use crate::config_manager::VisionConfig;
use crate::image::ImagePayload;

pub struct GeminiVision {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiVision {
    pub fn new(config: &VisionConfig, api_key: impl Into<String>) -> Result<Self, VisionError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VisionError::Client(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initialized GeminiVision: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request_body(&self, image: &ImagePayload, prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": prompt },
                    {
                        "inline_data": {
                            "mime_type": image.format.mime_type(),
                            "data": STANDARD.encode(&image.data),
                        }
                    }
                ]
            }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens,
            }
        })
    }
}

/// Pull the description out of a `generateContent` response body.
fn extract_text(body: &Value) -> Result<String, VisionError> {
    if let Some(reason) = body
        .pointer("/promptFeedback/blockReason")
        .and_then(|v| v.as_str())
    {
        return Err(VisionError::Blocked(reason.to_string()));
    }

    let candidate = body
        .pointer("/candidates/0")
        .ok_or(VisionError::EmptyResponse)?;

    let text: String = candidate
        .pointer("/content/parts")
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        if let Some(reason) = candidate.get("finishReason").and_then(|v| v.as_str()) {
            if reason == "SAFETY" || reason == "RECITATION" {
                return Err(VisionError::Blocked(reason.to_string()));
            }
        }
        return Err(VisionError::EmptyResponse);
    }
    Ok(text.to_string())
}

/// Error message from a Gemini error body, or the raw body when it has none.
fn error_message(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| raw.chars().take(200).collect())
}

#[async_trait]
impl VisionInterface for GeminiVision {
    async fn describe(&self, image: &ImagePayload, prompt: &str) -> Result<String, VisionError> {
        let body = self.build_request_body(image, prompt);
        debug!(
            "Sending {} byte {} image to {}",
            image.len(),
            image.format.mime_type(),
            self.model
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if status.as_u16() == 429 {
            warn!("Gemini quota exhausted");
            return Err(VisionError::QuotaExceeded(error_message(&raw)));
        }
        if !status.is_success() {
            return Err(VisionError::Api {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;
        let text = extract_text(&value)?;
        debug!("Gemini returned {} characters", text.chars().count());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImagePayload;
    use axum::body::Bytes;
    use mockito::{Matcher, Server};

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn client(base_url: String) -> GeminiVision {
        let config = VisionConfig {
            base_url,
            ..VisionConfig::default()
        };
        GeminiVision::new(&config, "test-key").unwrap()
    }

    fn image() -> ImagePayload {
        ImagePayload::new(Bytes::from_static(JPEG), Some("image/jpeg"), None).unwrap()
    }

    #[tokio::test]
    async fn sends_inline_image_and_joins_text_parts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{
                    "parts": [
                        { "text": "describe" },
                        { "inline_data": { "mime_type": "image/jpeg", "data": STANDARD.encode(JPEG) } }
                    ]
                }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "ከፊትዎ " }, { "text": "በር አለ።\n" }] },
                        "finishReason": "STOP"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client(server.url()).describe(&image(), "describe").await.unwrap();
        assert_eq!(text, "ከፊትዎ በር አለ።");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn quota_exhaustion_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(429)
            .with_body(r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#)
            .create_async()
            .await;

        let err = client(server.url()).describe(&image(), "p").await.unwrap_err();
        match err {
            VisionError::QuotaExceeded(msg) => assert_eq!(msg, "Resource has been exhausted"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_errors_carry_status() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = client(server.url()).describe(&image(), "p").await.unwrap_err();
        assert!(matches!(err, VisionError::Api { status: 500, ref message } if message == "boom"));
    }

    #[test]
    fn blocked_and_empty_responses() {
        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(extract_text(&blocked), Err(VisionError::Blocked(r)) if r == "SAFETY"));

        let no_candidates = json!({ "candidates": [] });
        assert!(matches!(extract_text(&no_candidates), Err(VisionError::EmptyResponse)));

        let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] });
        assert!(matches!(extract_text(&blank), Err(VisionError::EmptyResponse)));
    }
}
