use super::artifact_repository::{ArtifactFolder, ArtifactRepository};
use async_trait::async_trait;
use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream, Client as S3Client};
use std::sync::Arc;

/// S3 implementation of the artifact repository. References have the form
/// `s3://<bucket>/<folder><name>`.
pub struct S3ArtifactRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3ArtifactRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }

    fn reference_for(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }

    fn key_from_reference<'a>(&self, reference: &'a str) -> Result<&'a str, String> {
        reference
            .strip_prefix("s3://")
            .and_then(|rest| rest.strip_prefix(self.bucket.as_str()))
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| format!("Not an artifact of bucket {}: {}", self.bucket, reference))
    }
}

#[async_trait]
impl ArtifactRepository for S3ArtifactRepository {
    async fn put(
        &self,
        data: Vec<u8>,
        name: &str,
        folder: ArtifactFolder,
    ) -> Result<String, String> {
        let key = format!("{}{}", folder.prefix(), name);
        let size = data.len();

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %self.bucket,
                    key = %key,
                    "Failed to upload file to S3"
                );
                format!("Failed to upload file to S3: {}", DisplayErrorContext(&e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            "Uploaded artifact to S3"
        );

        Ok(self.reference_for(&key))
    }

    async fn get(&self, reference: &str) -> Result<Vec<u8>, String> {
        let key = self.key_from_reference(reference)?;

        let output = self
            .s3_client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %self.bucket,
                    key = %key,
                    "Failed to read file from S3"
                );
                format!("Failed to read file from S3: {}", DisplayErrorContext(&e))
            })?;

        let body = output.body.collect().await.map_err(|e| {
            tracing::error!(error = %e, key = %key, "Failed to collect S3 object body");
            format!("Failed to read S3 object body: {}", e)
        })?;

        let bytes = body.into_bytes().to_vec();
        tracing::debug!(key = %key, size_bytes = bytes.len(), "Read artifact from S3");

        Ok(bytes)
    }
}
