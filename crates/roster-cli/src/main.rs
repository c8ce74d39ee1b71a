mod commands;
mod output;

use clap::Parser;
use output::PrintFormat;
use roster_core::extraction::Backend;
use roster_core::paths::{DEFAULT_JSON_NAME, DEFAULT_XLSX_NAME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Extract student IDs and names from a PDF roster into JSON and Excel"
)]
struct Cli {
    /// PDF file name, relative to the io directory
    pdf_file: String,

    /// JSON output file name (must end in .json)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_JSON_NAME)]
    json: String,

    /// Excel output file name (must end in .xlsx)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_XLSX_NAME)]
    excel: String,

    /// Directory holding the input PDF and receiving the outputs [default: io/ next to the executable]
    #[arg(long, env = "ROSTER_IO_DIR", value_name = "DIR")]
    io_dir: Option<PathBuf>,

    /// PDF text backend: auto, pdftotext or lopdf
    #[arg(long, env = "ROSTER_PDF_BACKEND", default_value = "auto")]
    backend: Backend,

    /// Also print the extracted records
    #[arg(short, long, value_name = "FORMAT", value_enum)]
    print: Option<PrintFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::extract::run(commands::extract::ExtractArgs {
        pdf_file: cli.pdf_file,
        json_name: cli.json,
        excel_name: cli.excel,
        io_dir: cli.io_dir,
        backend: cli.backend,
        print: cli.print,
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr. `-v` flags win over `RUST_LOG`, which defaults to `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
