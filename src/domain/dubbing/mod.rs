pub mod dto;
pub mod error;
pub mod service;

pub use dto::UploadResponse;
pub use error::DubbingServiceError;
pub use service::{DubbingResult, DubbingService, DubbingServiceApi};
