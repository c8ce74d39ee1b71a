use lopdf::Document;

use crate::error::RosterError;
use crate::extraction::{PageContent, PdfExtractor};

/// Pure-Rust extraction backend built on lopdf.
///
/// Each line of a page's decoded text becomes one item.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RosterError> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| RosterError::Extraction(format!("failed to open PDF: {e}")))?;

        // get_pages() is keyed by 1-based page number, already in order
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for number in page_numbers {
            let text = doc.extract_text(&[number]).map_err(|e| {
                RosterError::Extraction(format!("failed to read text of page {number}: {e}"))
            })?;
            let items: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            tracing::debug!(backend = "lopdf", page = number, items = items.len(), "extracted page");
            pages.push(PageContent {
                page_number: number as usize,
                items,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a small PDF with one text line per page.
    fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for line in lines {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let pdf = build_pdf(&["F1234567890 JOHN SMITH", "F0987654321 JANE DOE"]);
        let pages = LopdfExtractor::new().extract_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 2);
        assert!(pages[0].items.join(" ").contains("F1234567890"));
        assert!(pages[1].items.join(" ").contains("F0987654321"));
    }

    #[test]
    fn test_invalid_bytes_is_extraction_error() {
        let err = LopdfExtractor::new()
            .extract_pages(b"definitely not a pdf")
            .unwrap_err();
        assert!(matches!(err, RosterError::Extraction(_)));
    }
}
