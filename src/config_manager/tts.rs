use serde::{Deserialize, Serialize};

/// Configuration for Text-to-Speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    #[serde(rename = "tts_model")]
    #[serde(default = "default_tts_model")]
    pub tts_model: String, // "gtts"

    #[serde(default = "default_language")]
    pub language: String,

    /// Top-level domain of the Google Translate host, e.g. "com" or "com.et"
    #[serde(default = "default_tld")]
    pub tld: String,

    #[serde(default)]
    pub slow: bool,

    /// Replaces `https://translate.google.{tld}` when set
    #[serde(rename = "base_url")]
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(rename = "max_concurrent_requests")]
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

fn default_tts_model() -> String {
    "gtts".to_string()
}

fn default_language() -> String {
    "am".to_string()
}

fn default_tld() -> String {
    "com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_concurrent_requests() -> usize {
    4
}

impl TTSConfig {
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://translate.google.{}", self.tld))
    }
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            tts_model: default_tts_model(),
            language: default_language(),
            tld: default_tld(),
            slow: false,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}
