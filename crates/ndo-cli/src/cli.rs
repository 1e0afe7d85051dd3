use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `ndomig` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ndomig",
    version,
    about = "Export orchestrator config to Excel and migrate EPGs between tenants"
)]
#[command(group(
    clap::ArgGroup::new("mode").required(true).args(["get", "put"]),
))]
pub struct Cli {
    /// Export controller configuration into a workbook
    #[arg(short, long)]
    pub get: bool,

    /// Read the edited EPG Selection sheet and run the migration
    #[arg(short, long)]
    pub put: bool,

    /// Workbook path to write (--get) or read (--put)
    #[arg(short, long, default_value = "data.xlsx")]
    pub filename: PathBuf,

    /// Validate the controller's TLS certificate (off for lab controllers)
    #[arg(short, long)]
    pub ssl: bool,

    /// Debug console logging
    #[arg(short, long)]
    pub debug: bool,
}
