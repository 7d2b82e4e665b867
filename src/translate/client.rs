use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::interface::{TranslateError, TranslateInterface, TranslateRequest, TranslateResponse};
use crate::config_manager::TranslatorConfig;

/// JSON translation API: `{text, source_language, target_language}` in,
/// `{translated_text}` out
pub struct HttpTranslator {
    http_client: reqwest::Client,
    url: String,
    source_language: String,
    target_language: String,
}

impl HttpTranslator {
    pub fn new(config: &TranslatorConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        info!(
            "Initialized HttpTranslator: {} -> {} via {}",
            config.source_language, config.target_language, config.url
        );
        Ok(Self {
            http_client,
            url: config.url.clone(),
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        })
    }
}

#[async_trait]
impl TranslateInterface for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            text: text.to_string(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        };

        let response = self.http_client.post(&self.url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let result: TranslateResponse = response.json().await?;
        let translated = result
            .translated_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(TranslateError::EmptyResponse)?;
        debug!("Translated {} chars into {} chars", text.chars().count(), translated.chars().count());
        Ok(translated)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
