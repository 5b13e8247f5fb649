#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Invalid locale specified or locale not supported.")]
    Unsupported(String),
    #[error("Male or female voice not found for {0}.")]
    MissingVoices(String),
    #[error("CSV must contain a column with '{0}--Transcription' for the specified language.")]
    MissingTranscriptionColumn(String),
    #[error("Detected language '{detected}' does not match the expected language '{expected}' in '{code}--Transcription'.")]
    LanguageMismatch {
        code: String,
        detected: String,
        expected: String,
    },
}
