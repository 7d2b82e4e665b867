use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config_manager::system::SystemConfig;
use crate::config_manager::tts::TTSConfig;
use crate::config_manager::translator::TranslatorConfig;
use crate::config_manager::tts_preprocessor::TTSPreprocessorConfig;
use crate::config_manager::vision::VisionConfig;

/// Config files tried, in order, when `CONFIG_PATH` is not set
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["conf.yaml", "conf.json"];

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "vision_config")]
    #[serde(default)]
    pub vision_config: VisionConfig,

    #[serde(rename = "tts_config")]
    #[serde(default)]
    pub tts_config: TTSConfig,

    #[serde(rename = "tts_preprocessor_config")]
    #[serde(default)]
    pub tts_preprocessor_config: TTSPreprocessorConfig,

    #[serde(rename = "translator_config")]
    #[serde(default)]
    pub translator_config: Option<TranslatorConfig>,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_file, validate_config};
        let value = read_config_file(path)?;
        validate_config(value)
    }

    /// Resolve the configuration the way the binary does: an explicit
    /// `CONFIG_PATH`, else the first default file that exists, else built-in
    /// defaults. Environment overrides are applied last.
    pub fn discover() -> anyhow::Result<Self> {
        let mut config = match std::env::var("CONFIG_PATH").ok() {
            Some(path) => {
                let config = Self::load(&path)?;
                info!("Loaded configuration from: {}", path);
                config
            }
            None => match DEFAULT_CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
                Some(path) => {
                    let config = Self::load(path)?;
                    info!("Loaded configuration from: {}", path);
                    config
                }
                None => {
                    info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply well-known environment variables on top of the loaded values
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")) {
            self.vision_config.api_key = Some(key);
        }
        if let Some(model) = non_empty("GEMINI_MODEL") {
            self.vision_config.model = model;
        }
        if let Some(host) = non_empty("HOST") {
            self.system_config.host = host;
        }
        if let Some(port) = non_empty("PORT") {
            match port.trim().parse() {
                Ok(port) => self.system_config.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(url) = non_empty("TRANSLATOR_API_URL") {
            match self.translator_config.as_mut() {
                Some(translator) => translator.url = url,
                None => self.translator_config = Some(TranslatorConfig::new(url)),
            }
        }
    }
}
