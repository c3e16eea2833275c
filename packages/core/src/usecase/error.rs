//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors returned when exporting the registry at shutdown
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The repository rejected the write
    #[error("could not save {rooms} room(s): {source}")]
    SaveFailed {
        rooms: usize,
        #[source]
        source: RepositoryError,
    },
}
