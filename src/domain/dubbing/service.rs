use super::error::DubbingServiceError;
use crate::domain::locale::{
    clean_locale, find_transcription_column, locale_code, resolve_voices, LanguageValidator,
    LocaleError, VoicePair,
};
use crate::domain::ssml::SsmlDocument;
use crate::domain::transcript::{TranscriptTable, ENGLISH_TRANSCRIPTION_COLUMN};
use crate::infrastructure::repositories::{
    ArtifactFolder, ArtifactRepository, SecretRepository, SpeechCredentials, SpeechRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

const ENGLISH_MALE_VOICE: &str = "en-US-GuyNeural";
const ENGLISH_FEMALE_VOICE: &str = "en-US-JennyNeural";
const ENGLISH_XML_LANG: &str = "en-US";

/// Storage references of the two generated audio files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DubbingResult {
    pub english_audio_link: String,
    pub language_audio_link: String,
}

pub struct DubbingService {
    artifact_repo: Arc<dyn ArtifactRepository>,
    secret_repo: Arc<dyn SecretRepository>,
    speech_repo: Arc<dyn SpeechRepository>,
    secret_name: String,
    language_validator: LanguageValidator,
}

impl DubbingService {
    pub fn new(
        artifact_repo: Arc<dyn ArtifactRepository>,
        secret_repo: Arc<dyn SecretRepository>,
        speech_repo: Arc<dyn SpeechRepository>,
        secret_name: String,
    ) -> Self {
        Self {
            artifact_repo,
            secret_repo,
            speech_repo,
            secret_name,
            language_validator: LanguageValidator::new(),
        }
    }
}

#[async_trait]
pub trait DubbingServiceApi: Send + Sync {
    /// Produce an English and a source-language narration of a transcript
    ///
    /// This operation:
    /// - Parses the CSV and stores the upload
    /// - Resolves a male and a female voice for `source`
    /// - Builds, stores and synthesizes the English markup
    /// - Checks the source transcription column (and its language, where required)
    /// - Builds, stores and synthesizes the source-language markup
    ///
    /// Artifacts stored before a failing step are kept.
    async fn dub_transcript(
        &self,
        csv: Vec<u8>,
        source: &str,
    ) -> Result<DubbingResult, DubbingServiceError>;
}

#[async_trait]
impl DubbingServiceApi for DubbingService {
    async fn dub_transcript(
        &self,
        csv: Vec<u8>,
        source: &str,
    ) -> Result<DubbingResult, DubbingServiceError> {
        let locale = clean_locale(source);
        tracing::info!(
            locale = %locale,
            upload_size = csv.len(),
            "Transcript dubbing request"
        );

        // 1. Parse and keep the upload
        let table = TranscriptTable::from_csv(&csv)?;
        self.store_input(csv).await?;

        // 2. Voices for the requested locale
        let credentials = self.speech_credentials().await?;
        let voices = self.resolve_source_voices(&locale, &credentials).await?;

        // 3. English narration
        let english_voices = VoicePair::new(ENGLISH_MALE_VOICE, ENGLISH_FEMALE_VOICE);
        let english_ssml = self
            .generate_ssml(
                &table,
                ENGLISH_TRANSCRIPTION_COLUMN,
                &english_voices,
                ENGLISH_XML_LANG,
            )
            .await?;
        let english_audio_link = self
            .convert_ssml_to_audio(&english_ssml, &credentials)
            .await?;

        // 4. Source transcription column
        let code = locale_code(&locale);
        let column = find_transcription_column(&table, code).ok_or_else(|| {
            tracing::error!(
                locale_code = code,
                "CSV is missing a transcription column for the specified language"
            );
            LocaleError::MissingTranscriptionColumn(code.to_string())
        })?;

        // 5. Language gate
        let sample = table.first_value(column)?;
        self.language_validator.validate(code, sample)?;

        // 6. Source-language narration
        let source_ssml = self
            .generate_ssml(&table, column, &voices, &locale)
            .await?;
        let language_audio_link = self
            .convert_ssml_to_audio(&source_ssml, &credentials)
            .await?;

        tracing::info!(
            english_audio_link = %english_audio_link,
            language_audio_link = %language_audio_link,
            "Audio files generated"
        );

        Ok(DubbingResult {
            english_audio_link,
            language_audio_link,
        })
    }
}

impl DubbingService {
    /// Build the markup for `column` and store it; returns the storage reference.
    pub async fn generate_ssml(
        &self,
        table: &TranscriptTable,
        column: &str,
        voices: &VoicePair,
        xml_lang: &str,
    ) -> Result<String, DubbingServiceError> {
        let document = SsmlDocument::from_table(table, column, voices, xml_lang)?;

        tracing::info!(
            column,
            xml_lang,
            voice_segments = document.voice_count(),
            "SSML generated"
        );

        self.put_artifact(document.render().into_bytes(), ArtifactFolder::Ssml)
            .await
    }

    /// Synthesize a stored markup document and store the audio; returns the
    /// audio's storage reference.
    pub async fn convert_ssml_to_audio(
        &self,
        ssml_reference: &str,
        credentials: &SpeechCredentials,
    ) -> Result<String, DubbingServiceError> {
        let ssml_bytes = self
            .artifact_repo
            .get(ssml_reference)
            .await
            .map_err(DubbingServiceError::Dependency)?;
        let ssml = String::from_utf8(ssml_bytes).map_err(|e| {
            DubbingServiceError::Dependency(format!("Stored SSML is not valid UTF-8: {}", e))
        })?;

        let audio = self
            .speech_repo
            .synthesize(&ssml, credentials)
            .await
            .map_err(DubbingServiceError::Dependency)?;

        self.put_artifact(audio, ArtifactFolder::Audio).await
    }

    async fn store_input(&self, csv: Vec<u8>) -> Result<String, DubbingServiceError> {
        self.put_artifact(csv, ArtifactFolder::Input).await
    }

    async fn put_artifact(
        &self,
        data: Vec<u8>,
        folder: ArtifactFolder,
    ) -> Result<String, DubbingServiceError> {
        let name = folder.new_artifact_name();
        self.artifact_repo
            .put(data, &name, folder)
            .await
            .map_err(DubbingServiceError::Dependency)
    }

    async fn speech_credentials(&self) -> Result<SpeechCredentials, DubbingServiceError> {
        self.secret_repo
            .get_speech_credentials(&self.secret_name)
            .await
            .map_err(DubbingServiceError::Dependency)
    }

    async fn resolve_source_voices(
        &self,
        locale: &str,
        credentials: &SpeechCredentials,
    ) -> Result<VoicePair, DubbingServiceError> {
        let catalog = self
            .speech_repo
            .list_voices(credentials)
            .await
            .map_err(DubbingServiceError::Dependency)?;

        resolve_voices(locale, &catalog).map_err(|e| {
            tracing::error!(locale, error = %e, "Voice resolution failed");
            DubbingServiceError::from(e)
        })
    }
}
