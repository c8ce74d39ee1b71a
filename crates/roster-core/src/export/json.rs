use std::path::Path;

use crate::error::RosterError;
use crate::model::StudentRecord;

/// Serialize records as a pretty-printed JSON array (2-space indent).
pub fn to_json_string(records: &[StudentRecord]) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records as JSON, replacing any existing file at `path`.
pub fn write_json(records: &[StudentRecord], path: &Path) -> Result<(), RosterError> {
    let json = to_json_string(records)?;
    std::fs::write(path, json).map_err(|e| RosterError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote JSON");
    Ok(())
}
