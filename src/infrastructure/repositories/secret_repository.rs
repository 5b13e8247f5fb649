use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

/// Credentials for the speech provider, stored as a JSON secret of the form
/// `{"AZURE_API_KEY": "...", "AZURE_REGION": "..."}`
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct SpeechCredentials {
    #[serde(rename = "AZURE_API_KEY")]
    pub api_key: String,
    #[serde(rename = "AZURE_REGION")]
    pub region: String,
}

impl SpeechCredentials {
    pub fn from_secret_string(secret: &str) -> Result<Self, String> {
        serde_json::from_str(secret)
            .map_err(|e| format!("Speech credentials secret is malformed: {}", e))
    }
}

impl fmt::Debug for SpeechCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechCredentials")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

#[async_trait]
pub trait SecretRepository: Send + Sync {
    async fn get_speech_credentials(&self, secret_name: &str) -> Result<SpeechCredentials, String>;
}
