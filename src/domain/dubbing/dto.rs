use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SUCCESS_MESSAGE: &str = "Audio files generated successfully";

/// Response for POST /upload-csv/
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = "Audio files generated successfully")]
    pub message: String,
    pub english_audio_link: String,
    pub language_audio_link: String,
}
