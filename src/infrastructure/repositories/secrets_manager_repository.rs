use super::secret_repository::{SecretRepository, SpeechCredentials};
use async_trait::async_trait;
use aws_sdk_secretsmanager::{error::DisplayErrorContext, Client as SecretsManagerClient};
use std::sync::Arc;

/// AWS Secrets Manager implementation of the secret repository
pub struct SecretsManagerRepository {
    client: Arc<SecretsManagerClient>,
}

impl SecretsManagerRepository {
    pub fn new(client: Arc<SecretsManagerClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretRepository for SecretsManagerRepository {
    async fn get_speech_credentials(&self, secret_name: &str) -> Result<SpeechCredentials, String> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_name)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    secret_name,
                    "Failed to retrieve secret"
                );
                format!("Failed to retrieve secret: {}", DisplayErrorContext(&e))
            })?;

        let secret = output
            .secret_string()
            .ok_or_else(|| format!("Secret {} has no string value", secret_name))?;

        SpeechCredentials::from_secret_string(secret)
    }
}
