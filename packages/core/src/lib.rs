//! Classroom booking library.
//!
//! Rooms with hourly bookings, a registry that keeps room ids unique, and a CSV
//! file that carries the registry between sessions.

pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use domain::{RegistryError, Room, RoomFilter, RoomId, RoomRegistry};
pub use infrastructure::repository::{CsvRoomRepository, DEFAULT_DATA_FILE};
pub use usecase::{PersistRegistryUseCase, RestoreRegistryUseCase, Restored};
