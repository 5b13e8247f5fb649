use async_trait::async_trait;
use uuid::Uuid;

/// Logical folders artifacts are stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFolder {
    Input,
    Ssml,
    Audio,
}

impl ArtifactFolder {
    pub fn prefix(&self) -> &'static str {
        match self {
            ArtifactFolder::Input => "input/",
            ArtifactFolder::Ssml => "ssml/",
            ArtifactFolder::Audio => "audio/",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFolder::Input => "csv",
            ArtifactFolder::Ssml => "ssml",
            ArtifactFolder::Audio => "wav",
        }
    }

    /// A fresh, globally unique file name for this folder
    pub fn new_artifact_name(&self) -> String {
        format!("{}.{}", Uuid::new_v4(), self.extension())
    }
}

/// Write-once blob storage for uploaded transcripts, markup and audio.
///
/// Every artifact gets a freshly generated name, so writes never contend
/// and stored objects are never overwritten or removed.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Store `data` as `<folder><name>` and return its storage reference
    async fn put(&self, data: Vec<u8>, name: &str, folder: ArtifactFolder)
        -> Result<String, String>;

    /// Read back an artifact by the reference `put` returned
    async fn get(&self, reference: &str) -> Result<Vec<u8>, String>;
}
