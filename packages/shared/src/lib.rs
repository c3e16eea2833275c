//! Shared utilities for Classbook binaries.

pub mod logger;

pub use logger::setup_logger;
