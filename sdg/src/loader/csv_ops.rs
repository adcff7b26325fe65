use crate::model::SdgError;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// opens a file for one of the CSV readers
pub fn open(path: &Path) -> Result<File, SdgError> {
    File::open(path).map_err(|source| SdgError::ReadError {
        filepath: path.to_string_lossy().to_string(),
        source,
    })
}

/// maps each (trimmed) header to its column index. for repeated headers the
/// first column wins.
pub fn header_lookup(headers: &StringRecord) -> HashMap<&str, usize> {
    let mut lookup = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        lookup.entry(header.trim()).or_insert(idx);
    }
    lookup
}

pub fn column_index(
    lookup: &HashMap<&str, usize>,
    column: &str,
    source_name: &str,
) -> Result<usize, SdgError> {
    lookup
        .get(column)
        .copied()
        .ok_or_else(|| SdgError::MissingColumn {
            filepath: source_name.to_string(),
            column: if column.is_empty() {
                String::from("(unnamed)")
            } else {
                column.to_string()
            },
        })
}

/// trimmed value of a column, empty when the row is short
pub fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or_default().trim()
}

/// parses a census count. thousands separators are removed and "-", the
/// census notation for zero, and empty cells read as 0.
pub fn parse_count(value: &str, column: &str, source_name: &str, row: usize) -> Result<u64, SdgError> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return Ok(0);
    }
    cleaned.parse::<u64>().map_err(|e| SdgError::InvalidValue {
        filepath: source_name.to_string(),
        row,
        message: format!("column '{column}' has invalid count '{value}': {e}"),
    })
}

/// parses a coordinate, None for an empty cell
pub fn parse_coordinate(
    value: &str,
    column: &str,
    source_name: &str,
    row: usize,
) -> Result<Option<f64>, SdgError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|e| SdgError::InvalidValue {
            filepath: source_name.to_string(),
            row,
            message: format!("column '{column}' has invalid coordinate '{value}': {e}"),
        })
}

pub fn csv_error(source_name: &str, source: csv::Error) -> SdgError {
    SdgError::CsvReadError {
        filepath: source_name.to_string(),
        source,
    }
}
