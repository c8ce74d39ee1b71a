use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One student entry found in a roster PDF.
///
/// Serialized as `{ "studentId": ..., "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// `F` followed by exactly 10 digits.
    pub student_id: String,
    /// Title-cased display name with single spaces.
    pub name: String,
}

/// A raw pattern match, before name normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    pub student_id: String,
    pub raw_name: String,
}

/// How a pipeline run ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Both output files were written.
    Written {
        records: Vec<StudentRecord>,
        json_path: PathBuf,
        xlsx_path: PathBuf,
    },
    /// The document contained no student records; nothing was written.
    NoRecords,
}
