use super::error::LocaleError;
use serde::{Deserialize, Serialize};

/// One entry of the speech provider's voice list. Fields we do not use are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceCatalogEntry {
    pub locale: String,
    pub short_name: String,
    #[serde(default)]
    pub gender: String,
}

/// The two voices a transcript is read with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePair {
    pub male: String,
    pub female: String,
}

impl VoicePair {
    pub fn new(male: impl Into<String>, female: impl Into<String>) -> Self {
        Self {
            male: male.into(),
            female: female.into(),
        }
    }
}

/// Normalize a locale typed into the upload form
pub fn clean_locale(source: &str) -> String {
    source
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\\' | '\n' | '\t'))
        .collect()
}

/// Pick the first male and first female voice whose locale equals `locale`.
pub fn resolve_voices(
    locale: &str,
    catalog: &[VoiceCatalogEntry],
) -> Result<VoicePair, LocaleError> {
    let candidates: Vec<&VoiceCatalogEntry> =
        catalog.iter().filter(|v| v.locale == locale).collect();

    if candidates.is_empty() {
        return Err(LocaleError::Unsupported(locale.to_string()));
    }

    let male = candidates.iter().find(|v| v.gender.contains("Male"));
    let female = candidates.iter().find(|v| v.gender.contains("Female"));

    match (male, female) {
        (Some(male), Some(female)) => Ok(VoicePair::new(&male.short_name, &female.short_name)),
        _ => Err(LocaleError::MissingVoices(locale.to_string())),
    }
}
