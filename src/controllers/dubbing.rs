use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    domain::dubbing::{dto::SUCCESS_MESSAGE, DubbingService, DubbingServiceApi, UploadResponse},
    error::{AppError, AppResult, ErrorResponse},
};

const FILE_FIELD: &str = "file";
const SOURCE_FIELD: &str = "source";

pub struct DubbingController {
    dubbing_service: Arc<DubbingService>,
}

impl DubbingController {
    pub fn new(dubbing_service: Arc<DubbingService>) -> Self {
        Self { dubbing_service }
    }
}

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
pub struct UploadForm {
    /// UTF-8 CSV transcript
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Locale of the source language, e.g. `hi-IN`
    #[schema(example = "fr-FR")]
    pub source: String,
}

/// Either the generated audio links or the reason processing stopped
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum UploadOutcome {
    Generated(UploadResponse),
    Failed(ErrorResponse),
}

/// POST /upload-csv/ - Narrate a transcript in English and its source language
#[utoipa::path(
    post,
    path = "/upload-csv/",
    tag = "audio",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio links, or an `error` message when processing stopped", body = UploadOutcome)
    )
)]
pub async fn upload_csv(
    State(controller): State<Arc<DubbingController>>,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let (file, source) = read_upload_form(multipart).await?;

    let result = controller
        .dubbing_service
        .dub_transcript(file, &source)
        .await
        .map_err(AppError::from)?;

    Ok(Json(UploadResponse {
        message: SUCCESS_MESSAGE.to_string(),
        english_audio_link: result.english_audio_link,
        language_audio_link: result.language_audio_link,
    }))
}

async fn read_upload_form(mut multipart: Multipart) -> AppResult<(Vec<u8>, String)> {
    let mut file = None;
    let mut source = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload form: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read uploaded file: {}", e)))?;
                file = Some(bytes.to_vec());
            }
            SOURCE_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read source locale: {}", e)))?;
                source = Some(text);
            }
            other => tracing::debug!(field = other, "Ignoring unexpected form field"),
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing form field 'file'".to_string()))?;
    let source =
        source.ok_or_else(|| AppError::BadRequest("Missing form field 'source'".to_string()))?;

    Ok((file, source))
}
