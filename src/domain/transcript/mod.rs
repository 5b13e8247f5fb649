pub mod error;
pub mod model;

pub use error::TranscriptError;
pub use model::{parse_time_marker, TranscriptRow, TranscriptTable};

/// Speaker label used when a row has no explicit speaker
pub const PRIMARY_SPEAKER: &str = "spk_0";

pub const SPEAKER_COLUMN: &str = "Speaker";
pub const TIME_MARKERS_COLUMN: &str = "Time Markers";

/// Per-locale text columns are named `<CODE>--Transcription`
pub const TRANSCRIPTION_SUFFIX: &str = "--Transcription";
pub const ENGLISH_TRANSCRIPTION_COLUMN: &str = "EN--Transcription";
