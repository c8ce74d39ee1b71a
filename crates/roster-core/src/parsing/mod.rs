pub mod normalize;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{RecordMatch, StudentRecord};
use normalize::format_name;

/// Shape of a roster entry: `F` + 10 digits, whitespace, then a run of
/// uppercase letters and whitespace captured as the name.
///
/// The name run is greedy and may swallow a following uppercase `F`
/// when entries sit on adjacent lines with nothing between them.
pub const STUDENT_RECORD_PATTERN: &str = r"(F[0-9]{10})\s+([A-Z\s]+)";

static STUDENT_RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(STUDENT_RECORD_PATTERN).expect("student record pattern is valid")
});

/// Find every non-overlapping record match in document order.
pub fn parse_matches(text: &str) -> Vec<RecordMatch> {
    STUDENT_RECORD_RE
        .captures_iter(text)
        .map(|caps| RecordMatch {
            student_id: caps[1].to_string(),
            raw_name: caps[2].to_string(),
        })
        .collect()
}

/// Parse and normalize student records from extracted document text.
pub fn parse_records(text: &str) -> Vec<StudentRecord> {
    parse_matches(text)
        .into_iter()
        .map(StudentRecord::from)
        .collect()
}

impl From<RecordMatch> for StudentRecord {
    fn from(m: RecordMatch) -> Self {
        StudentRecord {
            name: format_name(&m.raw_name),
            student_id: m.student_id,
        }
    }
}
