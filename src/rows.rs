use crate::LabelError;
use serde::Deserialize;
use std::io::Read;

/// A source phrase and its translation, one label's worth of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub source: String,
    pub target: String,
}

/// Which input columns hold the source and target phrases
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Columns {
    pub source: String,
    pub target: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            source: "Spanish".to_string(),
            target: "English".to_string(),
        }
    }
}

/// Read label rows from CSV with a header line. Both phrases are trimmed, and rows missing
/// either one are skipped.
pub fn read_rows<R: Read>(reader: R, columns: &Columns) -> Result<Vec<LabelRow>, LabelError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| LabelError::MissingColumn(name.to_string()))
    };
    let source_col = position(&columns.source)?;
    let target_col = position(&columns.target)?;

    let mut rows: Vec<LabelRow> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let source = record.get(source_col).unwrap_or_default().trim();
        let target = record.get(target_col).unwrap_or_default().trim();

        if source.is_empty() || target.is_empty() {
            tracing::debug!(row = line + 1, "skipping row with an empty phrase");
            continue;
        }

        rows.push(LabelRow {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    Ok(rows)
}
