#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("File encoding is not supported. Please ensure the file is UTF-8 encoded.")]
    Encoding,
    #[error("Column '{0}' not found in the CSV file.")]
    MissingColumn(String),
    #[error("Column '{0}' does not contain any transcription.")]
    EmptyColumn(String),
    #[error("Error tokenizing data. {0}")]
    Malformed(String),
}
