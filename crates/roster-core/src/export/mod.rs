pub mod json;
pub mod xlsx;

/// Column headers shared by both output formats.
pub const HEADERS: [&str; 2] = ["studentId", "name"];
