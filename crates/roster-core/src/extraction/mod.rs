pub mod lopdf_text;
pub mod pdftotext;

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Text content of a single page of a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub page_number: usize,
    pub items: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in page order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RosterError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate pages into one document string.
///
/// Items on a page are joined by a single space and every page is
/// terminated by a newline.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.items.join(" "));
        text.push('\n');
    }
    text
}

/// Selectable extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// pdftotext when installed, lopdf otherwise.
    #[default]
    Auto,
    Pdftotext,
    Lopdf,
}

impl Backend {
    /// Build the extractor for this backend.
    pub fn extractor(self) -> Box<dyn PdfExtractor> {
        let chosen = match self {
            Backend::Auto if pdftotext::PdftotextExtractor::is_available() => Backend::Pdftotext,
            Backend::Auto => Backend::Lopdf,
            other => other,
        };
        tracing::debug!(requested = %self, chosen = %chosen, "selected extraction backend");
        match chosen {
            Backend::Pdftotext => Box::new(pdftotext::PdftotextExtractor::new()),
            _ => Box::new(lopdf_text::LopdfExtractor::new()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Pdftotext => write!(f, "pdftotext"),
            Backend::Lopdf => write!(f, "lopdf"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "pdftotext" => Ok(Backend::Pdftotext),
            "lopdf" => Ok(Backend::Lopdf),
            other => Err(format!(
                "unknown backend '{other}' (expected auto, pdftotext or lopdf)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, items: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_join_pages() {
        let pages = vec![
            page(1, &["F1234567890", "JOHN SMITH"]),
            page(2, &["Page", "two"]),
        ];
        assert_eq!(join_pages(&pages), "F1234567890 JOHN SMITH\nPage two\n");
    }

    #[test]
    fn test_join_pages_keeps_empty_pages() {
        let pages = vec![page(1, &["a"]), page(2, &[]), page(3, &["c"])];
        assert_eq!(join_pages(&pages), "a\n\nc\n");
    }

    #[test]
    fn test_join_no_pages() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("auto".parse::<Backend>().unwrap(), Backend::Auto);
        assert_eq!("PDFTOTEXT".parse::<Backend>().unwrap(), Backend::Pdftotext);
        assert_eq!("lopdf".parse::<Backend>().unwrap(), Backend::Lopdf);
        assert!("mupdf".parse::<Backend>().is_err());
    }

    #[test]
    fn test_backend_display_round_trips() {
        for b in [Backend::Auto, Backend::Pdftotext, Backend::Lopdf] {
            assert_eq!(b.to_string().parse::<Backend>().unwrap(), b);
        }
    }

    #[test]
    fn test_explicit_backend_names() {
        assert_eq!(Backend::Lopdf.extractor().backend_name(), "lopdf");
        assert_eq!(Backend::Pdftotext.extractor().backend_name(), "pdftotext");
    }
}
