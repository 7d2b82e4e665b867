use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::image::ImageError;
use crate::translate::TranslateError;
use crate::tts::TtsError;
use crate::vision::VisionError;

/// Errors surfaced to HTTP clients. Each variant maps to one status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    UpstreamTimeout(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status, self);
        } else {
            warn!("Rejected request ({}): {}", status, self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ImageError> for AppError {
    fn from(e: ImageError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<VisionError> for AppError {
    fn from(e: VisionError) -> Self {
        match e {
            VisionError::Timeout => Self::UpstreamTimeout("Vision API timed out".to_string()),
            VisionError::Client(msg) => Self::Internal(format!("Vision client error: {}", msg)),
            other => Self::Upstream(format!("Vision API error: {}", other)),
        }
    }
}

impl From<TranslateError> for AppError {
    fn from(e: TranslateError) -> Self {
        match e {
            TranslateError::Timeout => {
                Self::UpstreamTimeout("Translation service timed out".to_string())
            }
            other => Self::Upstream(format!("Translation service error: {}", other)),
        }
    }
}

impl From<TtsError> for AppError {
    fn from(e: TtsError) -> Self {
        match e {
            TtsError::Timeout => Self::UpstreamTimeout("Speech synthesis timed out".to_string()),
            TtsError::Client(msg) => Self::Internal(format!("Speech client error: {}", msg)),
            other => Self::Upstream(format!("Speech synthesis error: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_gateway_statuses() {
        let quota: AppError = VisionError::QuotaExceeded("slow down".into()).into();
        assert_eq!(quota.status(), StatusCode::BAD_GATEWAY);
        assert!(quota.to_string().contains("slow down"));

        for timeout in [
            AppError::from(VisionError::Timeout),
            AppError::from(TranslateError::Timeout),
            AppError::from(TtsError::Timeout),
        ] {
            assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT, "{timeout}");
        }

        let empty: AppError = TranslateError::EmptyResponse.into();
        assert_eq!(empty.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn image_errors_are_client_errors() {
        let err: AppError = ImageError::Empty.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
