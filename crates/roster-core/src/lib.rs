pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod paths;

use error::RosterError;
use extraction::PdfExtractor;
use model::{RunOutcome, StudentRecord};
use paths::{IoDir, OutputKind};

/// Everything one pipeline run needs to know about its files.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub io_dir: IoDir,
    pub pdf_name: String,
    pub json_name: String,
    pub xlsx_name: String,
}

impl RunRequest {
    /// Request with the default output names.
    pub fn new(io_dir: IoDir, pdf_name: impl Into<String>) -> Self {
        RunRequest {
            io_dir,
            pdf_name: pdf_name.into(),
            json_name: OutputKind::Json.default_name().to_string(),
            xlsx_name: OutputKind::Xlsx.default_name().to_string(),
        }
    }
}

/// Extract student records from PDF bytes.
///
/// Text of all pages is joined in page order before matching, so the
/// result is independent of how the backend splits items.
pub fn extract_records(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<StudentRecord>, RosterError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::join_pages(&pages);
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        chars = text.len(),
        "extracted document text"
    );

    let records = parsing::parse_records(&text);
    tracing::info!(records = records.len(), "matched student records");
    Ok(records)
}

/// Main API entry point: run the full PDF to JSON + XLSX conversion.
///
/// Output names are checked only after records were found, so a document
/// without records ends in `NoRecords` even when an output name is bad.
/// The JSON file is written before the workbook; a failed workbook write
/// leaves the JSON file in place.
pub fn run(request: &RunRequest, extractor: &dyn PdfExtractor) -> Result<RunOutcome, RosterError> {
    let pdf_path = request.io_dir.resolve_pdf(&request.pdf_name)?;
    let pdf_bytes = std::fs::read(&pdf_path)?;

    let records = extract_records(&pdf_bytes, extractor)?;
    if records.is_empty() {
        return Ok(RunOutcome::NoRecords);
    }

    paths::validate_output_name(&request.json_name, OutputKind::Json)?;
    paths::validate_output_name(&request.xlsx_name, OutputKind::Xlsx)?;

    let json_path = request.io_dir.output_path(&request.json_name);
    let xlsx_path = request.io_dir.output_path(&request.xlsx_name);

    export::json::write_json(&records, &json_path)?;
    export::xlsx::write_xlsx(&records, &xlsx_path)?;

    Ok(RunOutcome::Written {
        records,
        json_path,
        xlsx_path,
    })
}
