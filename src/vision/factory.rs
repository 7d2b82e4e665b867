use std::sync::Arc;
use anyhow::Result;
use tracing::{info, warn};

use super::gemini::GeminiVision;
use super::interface::VisionInterface;
use crate::config_manager::VisionConfig;

/// Factory for creating vision-language clients
pub struct VisionFactory;

impl VisionFactory {
    /// Create the configured vision client.
    ///
    /// Returns `Ok(None)` when no credential is set, so the service can still
    /// start and report the missing configuration through `/health`.
    pub fn create_vision(config: &VisionConfig) -> Result<Option<Arc<dyn VisionInterface>>> {
        let Some(api_key) = config.credential() else {
            warn!("GEMINI_API_KEY is not set; /analyze-image will be unavailable");
            return Ok(None);
        };

        info!("Initializing vision model: {}", config.vision_model);
        match config.vision_model.as_str() {
            "gemini" => Ok(Some(Arc::new(GeminiVision::new(config, api_key)?))),
            other => anyhow::bail!("Unsupported vision model: {}", other),
        }
    }
}
