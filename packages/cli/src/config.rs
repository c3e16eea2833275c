//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

use classbook_core::DEFAULT_DATA_FILE;

/// Classroom booking console
#[derive(Debug, Clone, Parser)]
#[command(name = "classbook", version, about)]
pub struct Args {
    /// CSV file the rooms are loaded from at startup and saved to on exit
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
