use serde::{Deserialize, Serialize};

/// Configuration for the vision-language model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    #[serde(rename = "vision_model")]
    #[serde(default = "default_vision_model")]
    pub vision_model: String, // "gemini"

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Overrides the built-in instruction sent alongside the image
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "max_output_tokens")]
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_vision_model() -> String {
    "gemini".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f32 {
    0.4
}

fn default_max_output_tokens() -> u32 {
    300
}

fn default_timeout_secs() -> u64 {
    30
}

impl VisionConfig {
    /// The credential, if one is set and non-blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            vision_model: default_vision_model(),
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            prompt: None,
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
