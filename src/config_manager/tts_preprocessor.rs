use serde::{Deserialize, Serialize};

/// Configuration for TTS preprocessor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSPreprocessorConfig {
    #[serde(rename = "strip_markdown")]
    #[serde(default = "default_true")]
    pub strip_markdown: bool,

    #[serde(rename = "ignore_angle_brackets")]
    #[serde(default = "default_true")]
    pub ignore_angle_brackets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TTSPreprocessorConfig {
    fn default() -> Self {
        Self {
            strip_markdown: true,
            ignore_angle_brackets: true,
        }
    }
}
