//! Room registry aggregate.
//!
//! Owns every room for the lifetime of a session, keeps room ids unique and is
//! the only place where booking input is range-checked.

use std::collections::HashMap;

use tracing::{debug, info};

use super::{
    entity::Room,
    error::RegistryError,
    filter::RoomFilter,
    value_object::{RoomId, VALID_HOURS},
};

/// In-memory collection of rooms, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    /// Rooms in insertion order
    rooms: Vec<Room>,
    /// Position of each room in `rooms`
    index: HashMap<RoomId, usize>,
}

impl RoomRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from trusted persisted rooms.
    ///
    /// Duplicate ids do not fail here: a later room replaces the earlier one and
    /// keeps the earlier position.
    pub fn hydrate(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut registry = Self::new();
        for room in rooms {
            let existing = registry.index.get(room.id()).copied();
            match existing {
                Some(position) => registry.rooms[position] = room,
                None => registry.insert(room),
            }
        }
        registry
    }

    fn insert(&mut self, room: Room) {
        self.index.insert(room.id().clone(), self.rooms.len());
        self.rooms.push(room);
    }

    /// Create a room with no bookings.
    ///
    /// The building label is stored trimmed, the same way the data file is read.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::RoomAlreadyExists` if the id is already registered
    pub fn add_room(
        &mut self,
        id: RoomId,
        building: String,
        capacity: u32,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(&id) {
            return Err(RegistryError::RoomAlreadyExists(id));
        }
        let trimmed = building.trim();
        let building = if trimmed.len() == building.len() {
            building
        } else {
            trimmed.to_string()
        };
        info!(room_id = %id, building = %building, capacity, "room added");
        self.insert(Room::new(id, building, capacity));
        Ok(())
    }

    /// Look up a room by id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::RoomNotFound` if no room has this id
    pub fn get_room(&self, id: &str) -> Result<&Room, RegistryError> {
        self.index
            .get(id)
            .map(|&position| &self.rooms[position])
            .ok_or_else(|| RegistryError::RoomNotFound(id.to_string()))
    }

    /// Look up a room by id for modification
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::RoomNotFound` if no room has this id
    pub fn get_room_mut(&mut self, id: &str) -> Result<&mut Room, RegistryError> {
        match self.index.get(id) {
            Some(&position) => Ok(&mut self.rooms[position]),
            None => Err(RegistryError::RoomNotFound(id.to_string())),
        }
    }

    /// Book `hour` in the room with the given id
    ///
    /// # Errors
    ///
    /// * `RegistryError::RoomNotFound` - no room has this id (checked first)
    /// * `RegistryError::InvalidHour` - hour outside 0..=23
    /// * `RegistryError::Room` - the hour is already booked
    pub fn book_room(&mut self, id: &str, hour: i32) -> Result<(), RegistryError> {
        let room = self.get_room_mut(id)?;
        if !VALID_HOURS.contains(&hour) {
            return Err(RegistryError::InvalidHour(hour));
        }
        room.book_hour(hour)?;
        info!(room_id = %id, hour, "room booked");
        Ok(())
    }

    /// Rooms satisfying every constraint of `filter`, in insertion order
    pub fn find_rooms(&self, filter: &RoomFilter) -> Vec<&Room> {
        let found: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|room| filter.matches(room))
            .collect();
        debug!(?filter, matched = found.len(), "rooms filtered");
        found
    }

    /// All rooms in insertion order, used for display and export
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
