//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::RoomId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,
}

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The hour is already in the room's booked set
    #[error("Room {room_id} is already booked at hour {hour}")]
    TimeslotAlreadyBooked { room_id: RoomId, hour: i32 },
}

/// Errors returned by the room registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Lookup miss
    #[error("No room with id {0} found.")]
    RoomNotFound(String),

    /// Duplicate creation
    #[error("Room {0} already exists.")]
    RoomAlreadyExists(RoomId),

    /// Booking hour outside the valid range
    #[error("Hour must be between 0 and 23 (got {0}).")]
    InvalidHour(i32),

    /// Propagated unchanged from the room
    #[error(transparent)]
    Room(#[from] RoomError),
}

/// Errors raised by a `RoomRepository` implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The persisted state could not be read
    #[error("failed to read persisted rooms: {0}")]
    Read(String),

    /// The persisted state could not be written
    #[error("failed to write persisted rooms: {0}")]
    Write(String),

    /// A row could not be turned into a room
    #[error("malformed row {row}: {reason}")]
    Malformed { row: u64, reason: String },
}
