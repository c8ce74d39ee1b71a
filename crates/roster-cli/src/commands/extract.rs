use roster_core::error::RosterError;
use roster_core::extraction::Backend;
use roster_core::model::RunOutcome;
use roster_core::paths::IoDir;
use roster_core::RunRequest;
use std::path::PathBuf;

use crate::output::{self, PrintFormat};

pub struct ExtractArgs {
    pub pdf_file: String,
    pub json_name: String,
    pub excel_name: String,
    pub io_dir: Option<PathBuf>,
    pub backend: Backend,
    pub print: Option<PrintFormat>,
}

pub fn run(args: ExtractArgs) -> Result<(), RosterError> {
    let io_dir = match args.io_dir {
        Some(dir) => IoDir::new(dir),
        None => IoDir::beside_executable()?,
    };
    tracing::debug!(io_dir = %io_dir.root().display(), "resolved io directory");

    let request = RunRequest {
        io_dir,
        pdf_name: args.pdf_file,
        json_name: args.json_name,
        xlsx_name: args.excel_name,
    };
    let extractor = args.backend.extractor();

    match roster_core::run(&request, extractor.as_ref())? {
        RunOutcome::NoRecords => {
            println!("No student data found in the PDF.");
        }
        RunOutcome::Written {
            records,
            json_path,
            xlsx_path,
        } => {
            match args.print {
                Some(PrintFormat::Json) => output::json::print(&records)?,
                Some(PrintFormat::Table) => {
                    println!("{}", output::table::format_records(&records))
                }
                None => {}
            }
            eprintln!("Student data saved to JSON: {}", json_path.display());
            eprintln!("Student data saved to Excel: {}", xlsx_path.display());
        }
    }

    Ok(())
}
