//! Stub clients and request builders shared by the HTTP tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rayee_backend::config_manager::Config;
use rayee_backend::image::ImagePayload;
use rayee_backend::routes::create_app;
use rayee_backend::state::AppState;
use rayee_backend::translate::{TranslateError, TranslateInterface};
use rayee_backend::tts::{AudioFormat, AudioOutput, TTSInterface, TtsError};
use rayee_backend::vision::{VisionError, VisionInterface};

pub const BOUNDARY: &str = "rayee-test-boundary";
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
pub const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x80\x00\x00";
pub const FAKE_MP3: &[u8] = b"ID3\x04\x00fake-mp3-frames";

/// What the stub vision model answers
pub enum VisionReply {
    Text(String),
    Fail,
    Timeout,
}

pub struct StubVision {
    reply: VisionReply,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl StubVision {
    pub fn new(reply: VisionReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(VisionReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionInterface for StubVision {
    async fn describe(&self, _image: &ImagePayload, prompt: &str) -> Result<String, VisionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            VisionReply::Text(text) => Ok(text.clone()),
            VisionReply::Fail => Err(VisionError::QuotaExceeded("quota exhausted".into())),
            VisionReply::Timeout => Err(VisionError::Timeout),
        }
    }

    fn model(&self) -> &str {
        "stub-vision"
    }
}

#[derive(Default)]
pub struct StubTts {
    pub texts: Mutex<Vec<String>>,
}

impl StubTts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.texts.lock().unwrap().len()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TTSInterface for StubTts {
    async fn synthesize(&self, text: &str) -> Result<AudioOutput, TtsError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(AudioOutput {
            data: FAKE_MP3.to_vec(),
            format: AudioFormat::Mp3,
        })
    }

    fn engine(&self) -> &str {
        "gTTS"
    }

    fn language(&self) -> &str {
        "am"
    }
}

pub struct StubTranslator {
    pub output: String,
    pub inputs: Mutex<Vec<String>>,
}

impl StubTranslator {
    pub fn new(output: &str) -> Arc<Self> {
        Arc::new(Self {
            output: output.to_string(),
            inputs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TranslateInterface for StubTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(self.output.clone())
    }

    fn endpoint(&self) -> &str {
        "stub://translate"
    }
}

pub fn app(
    config: Config,
    vision: Option<Arc<StubVision>>,
    tts: Arc<StubTts>,
    translator: Option<Arc<StubTranslator>>,
) -> Router {
    let state = AppState::with_clients(
        config,
        vision.map(|v| v as Arc<dyn VisionInterface>),
        tts,
        translator.map(|t| t as Arc<dyn TranslateInterface>),
    );
    create_app(state)
}

pub fn multipart_request(field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"frame.jpg\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/analyze-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
