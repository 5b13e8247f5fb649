use super::error::LocaleError;
use crate::domain::transcript::{TranscriptTable, TRANSCRIPTION_SUFFIX};
use lingua::{LanguageDetector, LanguageDetectorBuilder};

/// Returned by detection when no language can be told apart
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Locale codes whose transcription must be in a specific language:
/// (locale code, ISO 639-1 code, language name)
const VALIDATED_LOCALES: &[(&str, &str, &str)] = &[("IN", "hi", "Hindi")];

/// Trailing hyphen-delimited segment of a locale, e.g. `IN` for `hi-IN`
pub fn locale_code(locale: &str) -> &str {
    locale.rsplit('-').next().unwrap_or(locale)
}

/// First column, in header order, that mentions `code` and is a
/// transcription column.
pub fn find_transcription_column<'a>(table: &'a TranscriptTable, code: &str) -> Option<&'a str> {
    table
        .headers()
        .iter()
        .find(|column| column.contains(code) && column.ends_with(TRANSCRIPTION_SUFFIX))
        .map(String::as_str)
}

/// Guards locales whose transcription language can be confirmed by detection.
pub struct LanguageValidator {
    detector: LanguageDetector,
}

impl LanguageValidator {
    pub fn new() -> Self {
        // Every language enabled in Cargo.toml
        let detector = LanguageDetectorBuilder::from_all_languages().build();
        Self { detector }
    }

    /// ISO 639-1 code of the text's language, or `unknown`
    pub fn detect_language(&self, text: &str) -> String {
        match self.detector.detect_language_of(text) {
            Some(language) => language.iso_code_639_1().to_string(),
            None => {
                tracing::warn!(
                    text_length = text.len(),
                    "Could not detect language, reporting unknown"
                );
                UNKNOWN_LANGUAGE.to_string()
            }
        }
    }

    /// Check `sample` against the expected language for `code`. Codes
    /// without an expectation always pass and are not sent to the detector.
    pub fn validate(&self, code: &str, sample: &str) -> Result<(), LocaleError> {
        let Some((_, expected_iso, expected_name)) =
            VALIDATED_LOCALES.iter().find(|(locale, _, _)| *locale == code)
        else {
            return Ok(());
        };

        let detected = self.detect_language(sample);
        tracing::info!(
            locale_code = code,
            detected_language = %detected,
            expected_language = expected_iso,
            "Transcription language checked"
        );

        if detected != *expected_iso {
            return Err(LocaleError::LanguageMismatch {
                code: code.to_string(),
                detected,
                expected: expected_name.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for LanguageValidator {
    fn default() -> Self {
        Self::new()
    }
}
