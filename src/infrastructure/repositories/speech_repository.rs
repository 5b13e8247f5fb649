use super::secret_repository::SpeechCredentials;
use crate::domain::locale::VoiceCatalogEntry;
use async_trait::async_trait;

/// Repository for the text-to-speech provider.
/// Abstracts the underlying provider so dubbing can be tested offline.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// List every voice the provider offers
    async fn list_voices(
        &self,
        credentials: &SpeechCredentials,
    ) -> Result<Vec<VoiceCatalogEntry>, String>;

    /// Render an SSML document to audio
    ///
    /// Returns the raw audio bytes (24kHz 16-bit mono PCM in a RIFF container)
    ///
    /// # Errors
    /// Returns error if the provider rejects the document or is unavailable
    async fn synthesize(
        &self,
        ssml: &str,
        credentials: &SpeechCredentials,
    ) -> Result<Vec<u8>, String>;
}
