use super::secret_repository::SpeechCredentials;
use super::speech_repository::SpeechRepository;
use crate::domain::locale::VoiceCatalogEntry;
use async_trait::async_trait;

const VOICES_LIST_PATH: &str = "/cognitiveservices/voices/list";
const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

/// Azure Cognitive Services Speech implementation of the speech repository
pub struct AzureSpeechRepository {
    http_client: reqwest::Client,
    endpoint_override: Option<String>,
}

impl AzureSpeechRepository {
    /// `endpoint_override` replaces the regional endpoint derived from the
    /// credentials, e.g. to point at a local mock.
    pub fn new(endpoint_override: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint_override,
        }
    }

    fn base_url(&self, credentials: &SpeechCredentials) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.tts.speech.microsoft.com", credentials.region),
        }
    }
}

#[async_trait]
impl SpeechRepository for AzureSpeechRepository {
    async fn list_voices(
        &self,
        credentials: &SpeechCredentials,
    ) -> Result<Vec<VoiceCatalogEntry>, String> {
        let url = format!("{}{}", self.base_url(credentials), VOICES_LIST_PATH);

        let response = self
            .http_client
            .get(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &credentials.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Azure voices request failed");
                format!("Unable to retrieve supported voices from Azure: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "Failed to fetch Azure voices"
            );
            return Err("Unable to retrieve supported voices from Azure.".to_string());
        }

        let voices: Vec<VoiceCatalogEntry> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Azure voices: {}", e))?;

        tracing::info!(voice_count = voices.len(), "Fetched Azure voice catalog");

        Ok(voices)
    }

    async fn synthesize(
        &self,
        ssml: &str,
        credentials: &SpeechCredentials,
    ) -> Result<Vec<u8>, String> {
        let url = format!("{}{}", self.base_url(credentials), SYNTHESIS_PATH);
        let start_time = std::time::Instant::now();

        tracing::info!(
            ssml_length = ssml.len(),
            output_format = OUTPUT_FORMAT,
            "Calling Azure text-to-speech"
        );

        let response = self
            .http_client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &credentials.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, OUTPUT_FORMAT)
            .body(ssml.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Azure synthesis request failed");
                format!("Error from Azure API: {}", e)
            })?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Azure API response status");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(body = %error_text, "Error from Azure API");
            return Err(format!("Error from Azure API: {}", error_text));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Azure audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "azure",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
