//! Interactive console for classroom booking.
//!
//! Restores the room registry at startup, runs the numbered menu and saves the
//! registry once on exit.

pub mod config;
pub mod error;
pub mod ui;

// Re-export entry points
pub use config::Args;
pub use ui::{run, run_session};
