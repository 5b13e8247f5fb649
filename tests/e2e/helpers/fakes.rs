use async_trait::async_trait;
use audio_generation_backend::domain::locale::VoiceCatalogEntry;
use audio_generation_backend::infrastructure::repositories::{
    ArtifactFolder, ArtifactRepository, SecretRepository, SpeechCredentials, SpeechRepository,
};
use parking_lot::Mutex;
use std::collections::BTreeMap;

pub const FAKE_BUCKET: &str = "test-bucket";

/// Object store keeping artifacts in memory, keyed like S3 references
#[derive(Default)]
pub struct InMemoryArtifactRepository {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryArtifactRepository {
    pub fn references_in(&self, folder: ArtifactFolder) -> Vec<String> {
        let prefix = format!("s3://{}/{}", FAKE_BUCKET, folder.prefix());
        self.objects
            .lock()
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn read(&self, reference: &str) -> Option<Vec<u8>> {
        self.objects.lock().get(reference).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn put(
        &self,
        data: Vec<u8>,
        name: &str,
        folder: ArtifactFolder,
    ) -> Result<String, String> {
        let reference = format!("s3://{}/{}{}", FAKE_BUCKET, folder.prefix(), name);
        self.objects.lock().insert(reference.clone(), data);
        Ok(reference)
    }

    async fn get(&self, reference: &str) -> Result<Vec<u8>, String> {
        self.read(reference)
            .ok_or_else(|| format!("NoSuchKey: {}", reference))
    }
}

pub struct StaticSecretRepository;

#[async_trait]
impl SecretRepository for StaticSecretRepository {
    async fn get_speech_credentials(&self, _secret_name: &str) -> Result<SpeechCredentials, String> {
        SpeechCredentials::from_secret_string(
            r#"{"AZURE_API_KEY": "test-key", "AZURE_REGION": "eastus"}"#,
        )
    }
}

/// Speech provider with a fixed catalog that returns a tiny WAV header
pub struct StubSpeechRepository {
    catalog: Vec<VoiceCatalogEntry>,
    synthesized: Mutex<Vec<String>>,
}

impl StubSpeechRepository {
    pub fn new() -> Self {
        let voice = |locale: &str, gender: &str, short_name: &str| VoiceCatalogEntry {
            locale: locale.to_string(),
            short_name: short_name.to_string(),
            gender: gender.to_string(),
        };
        Self {
            catalog: vec![
                voice("en-US", "Male", "en-US-GuyNeural"),
                voice("en-US", "Female", "en-US-JennyNeural"),
                voice("fr-FR", "Male", "fr-FR-HenriNeural"),
                voice("fr-FR", "Female", "fr-FR-DeniseNeural"),
                voice("hi-IN", "Male", "hi-IN-MadhurNeural"),
                voice("hi-IN", "Female", "hi-IN-SwaraNeural"),
            ],
            synthesized: Mutex::new(Vec::new()),
        }
    }

    pub fn synthesized(&self) -> Vec<String> {
        self.synthesized.lock().clone()
    }
}

#[async_trait]
impl SpeechRepository for StubSpeechRepository {
    async fn list_voices(
        &self,
        _credentials: &SpeechCredentials,
    ) -> Result<Vec<VoiceCatalogEntry>, String> {
        Ok(self.catalog.clone())
    }

    async fn synthesize(
        &self,
        ssml: &str,
        credentials: &SpeechCredentials,
    ) -> Result<Vec<u8>, String> {
        assert_eq!(credentials.api_key, "test-key");
        self.synthesized.lock().push(ssml.to_string());
        Ok(mock_audio_bytes())
    }
}

pub fn mock_audio_bytes() -> Vec<u8> {
    // RIFF/WAVE header only
    b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec()
}
