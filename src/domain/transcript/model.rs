use super::error::TranscriptError;
use super::{PRIMARY_SPEAKER, SPEAKER_COLUMN, TIME_MARKERS_COLUMN};

/// A parsed transcript: a header row and data rows in file order.
///
/// Empty cells are stored as `None`, so "missing" and "empty" are the same
/// thing to every consumer of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl TranscriptTable {
    /// Parse an uploaded CSV body. The body must be valid UTF-8.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, TranscriptError> {
        let text = std::str::from_utf8(bytes).map_err(|_| TranscriptError::Encoding)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TranscriptError::Malformed(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(TranscriptError::Malformed(
                "No columns to parse from file".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TranscriptError::Malformed(e.to_string()))?;

            if record.len() > headers.len() {
                // Line numbers are 1-based and the header occupies line 1
                return Err(TranscriptError::Malformed(format!(
                    "Expected {} fields in line {}, saw {}",
                    headers.len(),
                    index + 2,
                    record.len()
                )));
            }

            let mut cells: Vec<Option<String>> = record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect();
            cells.resize(headers.len(), None);
            rows.push(cells);
        }

        tracing::debug!(
            columns = headers.len(),
            rows = rows.len(),
            "Transcript table parsed"
        );

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = TranscriptRow<'_>> {
        self.rows.iter().map(move |cells| TranscriptRow { table: self, cells })
    }

    /// First non-missing value of a column, in row order
    pub fn first_value(&self, column: &str) -> Result<&str, TranscriptError> {
        let index = self
            .column_index(column)
            .ok_or_else(|| TranscriptError::MissingColumn(column.to_string()))?;

        self.rows
            .iter()
            .find_map(|cells| cells[index].as_deref())
            .ok_or_else(|| TranscriptError::EmptyColumn(column.to_string()))
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }
}

/// Borrowed view over one data row
#[derive(Debug, Clone, Copy)]
pub struct TranscriptRow<'a> {
    table: &'a TranscriptTable,
    cells: &'a [Option<String>],
}

impl<'a> TranscriptRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table
            .column_index(column)
            .and_then(|index| self.cells[index].as_deref())
    }

    pub fn speaker(&self) -> &'a str {
        self.get(SPEAKER_COLUMN).unwrap_or(PRIMARY_SPEAKER)
    }

    pub fn time_marker_seconds(&self) -> i64 {
        self.get(TIME_MARKERS_COLUMN)
            .map(parse_time_marker)
            .unwrap_or(0)
    }
}

/// Convert an `mm:ss` marker to seconds. Anything that is not exactly two
/// integer fields yields 0.
pub fn parse_time_marker(marker: &str) -> i64 {
    let mut parts = marker.split(':');
    let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };

    match (minutes.trim().parse::<i64>(), seconds.trim().parse::<i64>()) {
        (Ok(minutes), Ok(seconds)) => minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .unwrap_or(0),
        _ => 0,
    }
}
