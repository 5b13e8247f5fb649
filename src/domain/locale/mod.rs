pub mod error;
pub mod language;
pub mod voices;

pub use error::LocaleError;
pub use language::{find_transcription_column, locale_code, LanguageValidator, UNKNOWN_LANGUAGE};
pub use voices::{clean_locale, resolve_voices, VoiceCatalogEntry, VoicePair};
