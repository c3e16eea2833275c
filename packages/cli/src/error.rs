//! Console layer error definitions.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use classbook_core::usecase::PersistError;

/// Errors that end an interactive session
#[derive(Debug, Error)]
pub enum UiError {
    /// Reading a line from the terminal failed
    #[error("failed to read input: {0}")]
    Readline(#[from] ReadlineError),

    /// Writing to the console failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// The registry could not be saved at shutdown
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Errors in text typed at a prompt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not made only of ASCII digits, or too large
    #[error("'{0}' is not a whole number")]
    NotWholeNumber(String),
}
