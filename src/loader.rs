use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::RddError;
use crate::value::{CellValue, Record};

/// Load and parse a JSON record set
///
/// The document must be a top-level array of flat objects. Each object
/// becomes a [`Record`] with its columns in document order.
pub fn load_records(path: &Path) -> Result<Vec<Record>, RddError> {
    // Check if file exists
    if !path.exists() {
        return Err(RddError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ),
        });
    }

    // Check if it's a file (not a directory)
    if !path.is_file() {
        return Err(RddError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a file: {}", path.display()),
            ),
        });
    }

    // Read file contents
    let content = fs::read_to_string(path).map_err(|source| RddError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    // Parse JSON
    let value: Value = serde_json::from_str(&content).map_err(|source| RddError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = value.as_array().ok_or_else(|| RddError::MalformedRecordSet {
        path: path.to_path_buf(),
        message: "expected a top-level JSON array of records".to_string(),
    })?;

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or_else(|| RddError::MalformedRecordSet {
            path: path.to_path_buf(),
            message: format!("record {} is not a JSON object", index),
        })?;

        let record: Record = object
            .iter()
            .map(|(column, value)| (column.clone(), CellValue::from_json(value)))
            .collect();
        records.push(record);
    }

    Ok(records)
}
