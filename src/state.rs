use std::sync::Arc;

use crate::config_manager::Config;
use crate::translate::{HttpTranslator, TranslateInterface};
use crate::tts::{TTSFactory, TTSInterface};
use crate::vision::{VisionFactory, VisionInterface, AMHARIC_PROMPT, ENGLISH_PROMPT};

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no vision credential is configured
    pub vision: Option<Arc<dyn VisionInterface>>,
    pub tts: Arc<dyn TTSInterface>,
    pub translator: Option<Arc<dyn TranslateInterface>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let vision = VisionFactory::create_vision(&config.vision_config)?;
        let tts = TTSFactory::create_tts(&config.tts_config)?;
        let translator = match &config.translator_config {
            Some(translator_config) => {
                Some(Arc::new(HttpTranslator::new(translator_config)?) as Arc<dyn TranslateInterface>)
            }
            None => None,
        };

        Ok(Self::with_clients(config, vision, tts, translator))
    }

    /// Assemble state from already-built clients
    pub fn with_clients(
        config: Config,
        vision: Option<Arc<dyn VisionInterface>>,
        tts: Arc<dyn TTSInterface>,
        translator: Option<Arc<dyn TranslateInterface>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            vision,
            tts,
            translator,
        }
    }

    /// Instruction sent with every image. A configured prompt wins; otherwise
    /// the model answers in English when a translator follows it, and in
    /// Amharic when it does not.
    pub fn vision_prompt(&self) -> &str {
        match &self.config.vision_config.prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ if self.translator.is_some() => ENGLISH_PROMPT,
            _ => AMHARIC_PROMPT,
        }
    }

    /// Model name for the health endpoint, even when the client is absent
    pub fn vision_model(&self) -> &str {
        self.vision
            .as_deref()
            .map(|v| v.model())
            .unwrap_or(&self.config.vision_config.model)
    }
}
