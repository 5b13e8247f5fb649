use crate::domain::locale::VoicePair;
use crate::domain::transcript::{TranscriptError, TranscriptTable, PRIMARY_SPEAKER};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

/// Bracketed annotations such as `[PH 0:01:06]`
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsmlSegment {
    Break { seconds: i64 },
    Voice { name: String, text: String },
}

/// An SSML `<speak>` document built from one text column of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsmlDocument {
    xml_lang: String,
    segments: Vec<SsmlSegment>,
}

impl SsmlDocument {
    /// Build the document for `column`, one voice segment per row with text.
    ///
    /// Rows whose text is empty after placeholder removal are skipped and do
    /// not move the running timestamp. A gap between consecutive spoken rows
    /// becomes a `<break>` before the second one.
    pub fn from_table(
        table: &TranscriptTable,
        column: &str,
        voices: &VoicePair,
        xml_lang: &str,
    ) -> Result<Self, TranscriptError> {
        if !table.has_column(column) {
            return Err(TranscriptError::MissingColumn(column.to_string()));
        }

        let mut segments = Vec::new();
        let mut last_timestamp = 0;

        for row in table.rows() {
            let text = clean_text(row.get(column).unwrap_or_default());
            if text.is_empty() {
                continue;
            }

            let timestamp = row.time_marker_seconds();
            let delay = timestamp.saturating_sub(last_timestamp).max(0);
            last_timestamp = timestamp;

            if delay > 0 {
                segments.push(SsmlSegment::Break { seconds: delay });
            }

            let voice = if row.speaker() == PRIMARY_SPEAKER {
                &voices.male
            } else {
                &voices.female
            };
            segments.push(SsmlSegment::Voice {
                name: voice.clone(),
                text,
            });
        }

        Ok(Self {
            xml_lang: xml_lang.to_string(),
            segments,
        })
    }

    pub fn xml_lang(&self) -> &str {
        &self.xml_lang
    }

    pub fn segments(&self) -> &[SsmlSegment] {
        &self.segments
    }

    pub fn voice_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, SsmlSegment::Voice { .. }))
            .count()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SsmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<speak version='1.0' xmlns='{}' xml:lang='{}'>",
            SSML_NAMESPACE,
            escape_xml(&self.xml_lang)
        )?;
        for segment in &self.segments {
            match segment {
                SsmlSegment::Break { seconds } => writeln!(f, "<break time='{}s' />", seconds)?,
                SsmlSegment::Voice { name, text } => writeln!(
                    f,
                    "<voice name='{}'>{}</voice>",
                    escape_xml(name),
                    escape_xml(text)
                )?,
            }
        }
        write!(f, "</speak>")
    }
}

/// Remove placeholder annotations from a transcript cell
pub fn clean_text(text: &str) -> String {
    PLACEHOLDER_PATTERN.replace_all(text, "").into_owned()
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
