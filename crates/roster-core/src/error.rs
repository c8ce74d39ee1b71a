use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("PDF file \"{}\" not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid file extension for {name}. Expected {expected} file.")]
    InvalidExtension { name: String, expected: &'static str },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
