use crate::domain::locale::LocaleError;
use crate::domain::transcript::TranscriptError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DubbingServiceError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<DubbingServiceError> for AppError {
    fn from(err: DubbingServiceError) -> Self {
        match err {
            DubbingServiceError::Transcript(e) => AppError::BadRequest(e.to_string()),
            DubbingServiceError::Locale(e) => AppError::BadRequest(e.to_string()),
            DubbingServiceError::Dependency(msg) => AppError::ExternalService(msg),
        }
    }
}
