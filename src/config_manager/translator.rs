use serde::{Deserialize, Serialize};

/// Configuration for the optional translation step between vision and TTS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub url: String,

    #[serde(rename = "source_language")]
    #[serde(default = "default_source_language")]
    pub source_language: String,

    #[serde(rename = "target_language")]
    #[serde(default = "default_target_language")]
    pub target_language: String,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "am".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl TranslatorConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
