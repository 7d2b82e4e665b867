use std::sync::Arc;
use anyhow::Result;
use tracing::info;
use crate::config_manager::TTSConfig;
use super::client::GoogleTTSClient;
use super::interface::TTSInterface;

/// Factory for creating TTS engines/clients
pub struct TTSFactory;

impl TTSFactory {
    /// Create a TTS client based on configuration
    pub fn create_tts(tts_config: &TTSConfig) -> Result<Arc<dyn TTSInterface>> {
        info!("Initializing TTS engine: {}", tts_config.tts_model);

        match tts_config.tts_model.as_str() {
            "gtts" | "google" => Ok(Arc::new(GoogleTTSClient::new(tts_config)?)),
            other => anyhow::bail!("Unsupported TTS engine: {}", other),
        }
    }
}
