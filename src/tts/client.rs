use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::{StreamExt, TryStreamExt};
use regex::Regex;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::{AudioFormat, AudioOutput, TTSInterface, TtsError};
use crate::config_manager::TTSConfig;
use crate::utils::sentence_divider::{split_into_chunks, GOOGLE_TTS_MAX_CHARS};

const BATCH_EXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";
const GOOGLE_TTS_RPC: &str = "jQ1olc";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Google Translate text-to-speech, spoken over the web client's
/// `batchexecute` RPC.
pub struct GoogleTTSClient {
    http_client: reqwest::Client,
    endpoint: String,
    referer: String,
    language: String,
    slow: bool,
    max_concurrent_requests: usize,
    audio_pattern: Regex,
}

impl GoogleTTSClient {
    pub fn new(config: &TTSConfig) -> Result<Self, TtsError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TtsError::Client(format!("Failed to create HTTP client: {}", e)))?;
        let audio_pattern = Regex::new(r#"jQ1olc","\[\\"([A-Za-z0-9+/=]*)\\"\]"#)
            .map_err(|e| TtsError::Client(e.to_string()))?;

        let base_url = config.base_url();
        let base_url = base_url.trim_end_matches('/');
        info!(
            "Initialized GoogleTTSClient: language={}, host={}",
            config.language, base_url
        );
        Ok(Self {
            http_client,
            endpoint: format!("{}{}", base_url, BATCH_EXECUTE_PATH),
            referer: format!("{}/", base_url),
            language: config.language.clone(),
            slow: config.slow,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
            audio_pattern,
        })
    }

    /// Form value for one chunk: `[[["jQ1olc","[text,lang,speed,\"null\"]",null,"generic"]]]`
    fn package_rpc(&self, text: &str) -> Result<String, TtsError> {
        let speed = if self.slow { Value::Bool(true) } else { Value::Null };
        let parameter = serde_json::to_string(&json!([text, self.language, speed, "null"]))
            .map_err(|e| TtsError::Client(e.to_string()))?;
        let rpc = json!([[[GOOGLE_TTS_RPC, parameter, Value::Null, "generic"]]]);
        serde_json::to_string(&rpc).map_err(|e| TtsError::Client(e.to_string()))
    }

    /// Extract and decode the audio from a `batchexecute` response.
    fn decode_audio(&self, body: &str) -> Result<Vec<u8>, TtsError> {
        let encoded = body
            .lines()
            .filter(|line| line.contains(GOOGLE_TTS_RPC))
            .find_map(|line| self.audio_pattern.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(TtsError::NoAudio)?;

        STANDARD
            .decode(encoded)
            .map_err(|e| TtsError::InvalidAudio(e.to_string()))
    }

    async fn synthesize_chunk(&self, index: usize, chunk: String) -> Result<Vec<u8>, TtsError> {
        let rpc = self.package_rpc(&chunk)?;
        debug!("Synthesizing chunk {} ({} chars)", index, chunk.chars().count());

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Referer", &self.referer)
            .form(&[("f.req", rpc)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TtsError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }
        self.decode_audio(&body)
    }
}

#[async_trait]
impl TTSInterface for GoogleTTSClient {
    async fn synthesize(&self, text: &str) -> Result<AudioOutput, TtsError> {
        let chunks = split_into_chunks(text, GOOGLE_TTS_MAX_CHARS);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }
        debug!("Text split into {} chunk(s)", chunks.len());

        // `buffered` keeps output in chunk order.
        let segments: Vec<Vec<u8>> = futures::stream::iter(chunks.into_iter().enumerate())
            .map(|(index, chunk)| self.synthesize_chunk(index, chunk))
            .buffered(self.max_concurrent_requests)
            .try_collect()
            .await?;

        Ok(AudioOutput {
            data: segments.concat(),
            format: AudioFormat::Mp3,
        })
    }

    fn engine(&self) -> &str {
        "gTTS"
    }

    fn language(&self) -> &str {
        &self.language
    }
}
