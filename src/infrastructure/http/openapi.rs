use utoipa::OpenApi;

use crate::controllers::dubbing::{UploadForm, UploadOutcome};
use crate::domain::dubbing::UploadResponse;
use crate::error::ErrorResponse;

pub const SWAGGER_UI_PATH: &str = "/swagger";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Audio Generation API",
        version = "1.0",
        description = "An API to upload CSVs, generate SSML, and convert it to audio using Azure TTS and S3 integration."
    ),
    paths(
        crate::controllers::dubbing::upload_csv,
        crate::controllers::health::health,
    ),
    components(schemas(UploadForm, UploadOutcome, UploadResponse, ErrorResponse)),
    tags(
        (name = "audio", description = "Transcript narration"),
        (name = "service", description = "Service status")
    )
)]
pub struct ApiDoc;
