use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::image::ImagePayload;
use crate::state::AppState;
use crate::utils::tts_preprocessor::prepare_for_speech;

pub const SERVICE_NAME: &str = "Ra'yee Backend";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Multipart field carrying the upload
const IMAGE_FIELD: &str = "image";

pub const X_AMHARIC_TEXT: HeaderName = HeaderName::from_static("x-amharic-text");
pub const X_ENGLISH_TEXT: HeaderName = HeaderName::from_static("x-english-text");

/// Encode text for a response header. Base64 keeps non-ASCII text intact.
pub fn encode_text_header(text: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&STANDARD.encode(text.as_bytes()))
        .map_err(|e| AppError::Internal(format!("Failed to encode header: {}", e)))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": VERSION,
        "status": "running",
        "description": "Amharic Smart Glass Assistant API",
        "endpoints": {
            "POST /analyze-image": "Analyze image and return Amharic audio",
            "GET /health": "Health check endpoint"
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": state.vision.is_some(),
        "model": state.vision_model(),
        "tts_engine": state.tts.engine(),
        "language": state.tts.language(),
        "translator": state.translator.as_ref().map(|t| t.endpoint()),
        "version": VERSION
    }))
}

pub async fn not_found(method: Method, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Invalid URL ({} {})", method, uri.path()) })),
    )
        .into_response()
}

/// Image in, Amharic speech out.
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("analyze_image", %request_id);
    process_image(state, multipart).instrument(span).await
}

async fn process_image(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let image = read_image_field(multipart).await?;

    // Bad input is reported before a missing credential.
    let vision = state.vision.clone().ok_or_else(|| {
        AppError::NotConfigured("GEMINI_API_KEY is not configured".to_string())
    })?;
    info!(
        "Received image: {} ({} bytes, {})",
        image.filename.as_deref().unwrap_or("<unnamed>"),
        image.len(),
        image.format.mime_type()
    );

    let description = vision.describe(&image, state.vision_prompt()).await?;
    drop(image);
    debug!("Vision description: {}", preview(&description));

    let (english_text, spoken_source) = match &state.translator {
        Some(translator) => {
            let translated = translator.translate(&description).await?;
            debug!("Translated description: {}", preview(&translated));
            (Some(description), translated)
        }
        None => (None, description),
    };

    let amharic_text = prepare_for_speech(&spoken_source, &state.config.tts_preprocessor_config);
    if amharic_text.is_empty() {
        return Err(AppError::Upstream(
            "Vision API returned no speakable text".to_string(),
        ));
    }

    let audio = state.tts.synthesize(&amharic_text).await?;
    info!("Audio generated: {} bytes", audio.data.len());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(audio.format.mime_type()),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=rayee_response.{}",
            audio.format.extension()
        ))
        .map_err(|e| AppError::Internal(e.to_string()))?,
    );
    headers.insert(X_AMHARIC_TEXT, encode_text_header(&amharic_text)?);
    if let Some(english) = &english_text {
        headers.insert(X_ENGLISH_TEXT, encode_text_header(english)?);
    }

    Ok((StatusCode::OK, headers, audio.data).into_response())
}

/// Find the `image` field and turn it into a validated payload
async fn read_image_field(mut multipart: Multipart) -> Result<ImagePayload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(ImagePayload::new(data, content_type.as_deref(), filename)?);
    }

    Err(AppError::BadRequest("No image file provided".to_string()))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded image is too large".to_string())
    } else {
        AppError::BadRequest(e.body_text())
    }
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(100).collect();
    if head.len() < text.len() {
        format!("{}...", head)
    } else {
        head
    }
}
