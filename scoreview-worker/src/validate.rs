use scoreview::Record;
use serde_json::Value;
use tracing::debug;

use crate::TaskError;

/// Result of validating a decoded payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated {
    pub records: Vec<Record>,
    /// Rows that failed shape validation and were dropped.
    pub dropped: usize,
}

/// Validates a decoded source payload into records.
///
/// Only a non-array top level is fatal. Each element must be a 3-element
/// array of `[string, string, finite number]`; elements that are not are
/// dropped silently (counted, not reported individually), so the output may
/// be shorter than the input. A `null` score marks a row the upstream
/// scorer gave up on; such rows are dropped like any other malformed row.
pub fn validate(raw: &Value) -> Result<Validated, TaskError> {
    let rows = raw.as_array().ok_or(TaskError::MalformedPayload)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match validate_row(row) {
            Some(record) => records.push(record),
            None => continue,
        }
    }

    let dropped = rows.len() - records.len();
    if dropped > 0 {
        debug!(dropped, kept = records.len(), "dropped malformed rows");
    }
    Ok(Validated { records, dropped })
}

fn validate_row(row: &Value) -> Option<Record> {
    let parts = row.as_array()?;
    let [id, content, score] = parts.as_slice() else {
        return None;
    };
    let id = id.as_str()?;
    let content = content.as_str()?;
    let score = score.as_f64().filter(|s| s.is_finite())?;
    Some(Record::new(id, content, score))
}
