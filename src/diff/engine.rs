use indexmap::IndexMap;

use crate::error::RddError;
use crate::types::{ChangeEntry, FieldChange};
use crate::value::Record;

/// Main reconcile function - compares two record sets keyed by the given
/// primary-key columns and returns all differences
///
/// Entries come out in a fixed order: additions in source key order, then
/// removals in target key order, then modifications in source key order.
/// Columns listed in `ignored_columns` are excluded from both value
/// reporting and comparison, but may still be used as key columns.
pub fn reconcile(
    key_columns: &[String],
    source: &[Record],
    target: &[Record],
    ignored_columns: &[String],
) -> Result<Vec<ChangeEntry>, RddError> {
    let first = source.first().ok_or(RddError::EmptySource)?;
    let columns: Vec<String> = first.keys().cloned().collect();

    if let Some(first_target) = target.first() {
        if first_target.len() != columns.len() {
            return Err(RddError::ColumnCountMismatch {
                source: columns.len(),
                target: first_target.len(),
            });
        }
    }

    let source_by_key = index_by_key(source, key_columns)?;
    let target_by_key = index_by_key(target, key_columns)?;

    let mut entries = Vec::new();

    // Present in source only
    for (key, record) in &source_by_key {
        if !target_by_key.contains_key(key) {
            entries.push(added_entry(key, record, &columns, ignored_columns)?);
        }
    }

    // Present in target only
    for key in target_by_key.keys() {
        if !source_by_key.contains_key(key) {
            entries.push(ChangeEntry::Removed { key: key.clone() });
        }
    }

    // Present on both sides
    for (key, source_record) in &source_by_key {
        if let Some(target_record) = target_by_key.get(key) {
            if let Some(entry) =
                modified_entry(key, source_record, target_record, &columns, ignored_columns)?
            {
                entries.push(entry);
            }
        }
    }

    Ok(entries)
}

/// Build the composite key of a record: the key columns' default string
/// forms joined with `|`
pub fn composite_key(record: &Record, key_columns: &[String]) -> Result<String, RddError> {
    let mut parts = Vec::with_capacity(key_columns.len());
    for column in key_columns {
        let value = record.get(column).ok_or_else(|| RddError::MissingColumn {
            column: column.clone(),
        })?;
        parts.push(value.to_string());
    }
    Ok(parts.join("|"))
}

/// Index records by composite key, preserving first-occurrence order.
/// A duplicate key keeps its position but takes the later record's value.
fn index_by_key<'a>(
    records: &'a [Record],
    key_columns: &[String],
) -> Result<IndexMap<String, &'a Record>, RddError> {
    let mut by_key = IndexMap::with_capacity(records.len());
    for record in records {
        by_key.insert(composite_key(record, key_columns)?, record);
    }
    Ok(by_key)
}

fn added_entry(
    key: &str,
    record: &Record,
    columns: &[String],
    ignored_columns: &[String],
) -> Result<ChangeEntry, RddError> {
    let mut fields = IndexMap::new();
    for column in columns {
        if is_ignored(column, ignored_columns) {
            continue;
        }
        let value = record.get(column).ok_or_else(|| RddError::MissingColumn {
            column: column.clone(),
        })?;
        fields.insert(column.clone(), value.dump());
    }
    Ok(ChangeEntry::Added {
        key: key.to_string(),
        fields,
    })
}

/// Compare a shared record column by column. Returns `None` when no
/// non-ignored column differs.
fn modified_entry(
    key: &str,
    source_record: &Record,
    target_record: &Record,
    columns: &[String],
    ignored_columns: &[String],
) -> Result<Option<ChangeEntry>, RddError> {
    let mut fields = IndexMap::new();
    for column in columns {
        if is_ignored(column, ignored_columns) {
            continue;
        }
        let source_value = source_record
            .get(column)
            .ok_or_else(|| RddError::MissingColumn {
                column: column.clone(),
            })?;
        let target_value = target_record
            .get(column)
            .ok_or_else(|| RddError::MissingColumn {
                column: column.clone(),
            })?;

        if !source_value.loosely_eq(target_value) {
            fields.insert(
                column.clone(),
                FieldChange {
                    old: target_value.to_string(),
                    new: source_value.to_string(),
                },
            );
        }
    }

    if fields.is_empty() {
        return Ok(None);
    }
    Ok(Some(ChangeEntry::Modified {
        key: key.to_string(),
        fields,
    }))
}

fn is_ignored(column: &str, ignored_columns: &[String]) -> bool {
    ignored_columns.iter().any(|ignored| ignored == column)
}
