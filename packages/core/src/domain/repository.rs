//! Persistence port for the room registry.
//!
//! The domain defines the trait; `infrastructure::repository` provides the
//! implementation (dependency inversion).

use super::{entity::Room, error::RepositoryError};

/// Loads and stores the full set of rooms
#[cfg_attr(test, mockall::automock)]
pub trait RoomRepository: Send + Sync {
    /// Read every persisted room in stored order.
    ///
    /// Missing persisted state is not an error and yields no rooms.
    fn load(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Replace the persisted state with `rooms`, in the given order.
    fn save(&self, rooms: &[Room]) -> Result<(), RepositoryError>;
}
