//! Domain layer for classroom booking.
//!
//! This module contains the booking rules, independent of the
//! persistence format and the interactive menu.

pub mod entity;
pub mod error;
pub mod filter;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::Room;
pub use error::{RegistryError, RepositoryError, RoomError, ValueObjectError};
pub use filter::RoomFilter;
pub use registry::RoomRegistry;
pub use repository::RoomRepository;
#[cfg(test)]
pub use repository::MockRoomRepository;
pub use value_object::{RoomId, VALID_HOURS};
