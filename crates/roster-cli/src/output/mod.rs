pub mod json;
pub mod table;

/// Format for echoing extracted records to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PrintFormat {
    Table,
    Json,
}
