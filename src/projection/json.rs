use recordlist_core::{Fields, Record, RecordListError, Result};

/// Serializes the fields of every record as a compact JSON array of objects.
///
/// Record order and each record's column order are kept.
pub fn as_json(records: &[Record]) -> Result<String> {
    let rows: Vec<&Fields> = records.iter().map(Record::fields).collect();
    serde_json::to_string(&rows).map_err(|e| RecordListError::Json(e.to_string()))
}
