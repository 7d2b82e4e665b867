//! Translate interface and wire types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: Option<String>,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("empty translation")]
    EmptyResponse,

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    #[error("request timed out")]
    Timeout,

    #[error("network failure: {0}")]
    Network(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate text, returning a trimmed, non-empty result
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Endpoint reported by the health check
    fn endpoint(&self) -> &str;
}
