//! Classroom booking console.
//!
//! Loads rooms from the CSV file, runs the interactive menu and saves on exit.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin classbook -- --file bookings_final_state.csv
//! ```

use std::process::ExitCode;

use clap::Parser;

use classbook_cli::Args;
use classbook_shared::setup_logger;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the session
    if let Err(e) = classbook_cli::run(&args) {
        tracing::error!("Session error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
