use async_trait::async_trait;
use thiserror::Error;

/// Audio formats a TTS engine can return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

/// Synthesized audio held in memory
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("nothing to synthesize")]
    EmptyText,

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no audio stream in response")]
    NoAudio,

    #[error("invalid audio payload: {0}")]
    InvalidAudio(String),

    #[error("request timed out")]
    Timeout,

    #[error("network failure: {0}")]
    Network(String),

    #[error("{0}")]
    Client(String),
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// TTS interface trait
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize the whole text into one audio clip.
    ///
    /// Either every part of the text is synthesized or an error is returned;
    /// partial audio is never produced.
    async fn synthesize(&self, text: &str) -> Result<AudioOutput, TtsError>;

    /// Engine name reported by the health endpoint
    fn engine(&self) -> &str;

    /// Language code the engine speaks
    fn language(&self) -> &str;
}
