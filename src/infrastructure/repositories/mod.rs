pub mod artifact_repository;
pub mod azure_speech_repository;
pub mod s3_artifact_repository;
pub mod secret_repository;
pub mod secrets_manager_repository;
pub mod speech_repository;

pub use artifact_repository::{ArtifactFolder, ArtifactRepository};
pub use azure_speech_repository::AzureSpeechRepository;
pub use s3_artifact_repository::S3ArtifactRepository;
pub use secret_repository::{SecretRepository, SpeechCredentials};
pub use secrets_manager_repository::SecretsManagerRepository;
pub use speech_repository::SpeechRepository;
