use crate::error::RosterError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs pdftotext in its default reading-order mode; every non-blank
/// output line becomes one text item of its page.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RosterError> {
        // pdftotext only reads from a path
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| RosterError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| RosterError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RosterError::PdftotextNotFound
                } else {
                    RosterError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(RosterError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        for page in &pages {
            tracing::debug!(
                backend = "pdftotext",
                page = page.page_number,
                items = page.items.len(),
                "extracted page"
            );
        }
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext terminates every page with a form feed (`\x0c`), so the
/// chunk after the last one is not a page.
fn split_pages(text: &str) -> Vec<PageContent> {
    let body = match text.strip_suffix('\x0c') {
        Some(body) => body,
        None if text.trim().is_empty() => return Vec::new(),
        None => text,
    };

    body.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            items: page_text
                .lines()
                .map(|l| l.trim_end())
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.to_string())
                .collect(),
        })
        .collect()
}
