use async_trait::async_trait;
use thiserror::Error;

use crate::image::ImagePayload;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("quota exhausted: {0}")]
    QuotaExceeded(String),

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("empty response from model")]
    EmptyResponse,

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("network failure: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Client(String),
}

impl From<reqwest::Error> for VisionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// A vision-language model that describes an image in response to a prompt
#[async_trait]
pub trait VisionInterface: Send + Sync {
    /// Describe the image. The returned text is trimmed and never empty.
    async fn describe(&self, image: &ImagePayload, prompt: &str) -> Result<String, VisionError>;

    /// Model identifier reported by the health endpoint
    fn model(&self) -> &str;
}
