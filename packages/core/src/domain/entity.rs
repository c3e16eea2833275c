//! Core domain models for classroom booking.

use std::{collections::BTreeSet, fmt};

use super::{error::RoomError, value_object::RoomId};

/// Represents one bookable classroom and the hours already reserved in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room identifier, unique within a registry
    id: RoomId,
    /// Free-form building label
    building: String,
    /// Number of seats, fixed at creation
    capacity: u32,
    /// Reserved hours; each hour appears at most once
    booked_hours: BTreeSet<i32>,
}

impl Room {
    /// Create a new room with no bookings.
    ///
    /// Only the registry creates rooms; callers go through `RoomRegistry::add_room`.
    pub(crate) fn new(id: RoomId, building: String, capacity: u32) -> Self {
        Self {
            id,
            building,
            capacity,
            booked_hours: BTreeSet::new(),
        }
    }

    /// Rebuild a room from trusted persisted state.
    ///
    /// Hours are taken as-is; repeated values collapse into one booking.
    pub(crate) fn restore(
        id: RoomId,
        building: String,
        capacity: u32,
        booked_hours: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            id,
            building,
            capacity,
            booked_hours: booked_hours.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn building(&self) -> &str {
        &self.building
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Booked hours in ascending order
    pub fn booked_hours(&self) -> &BTreeSet<i32> {
        &self.booked_hours
    }

    /// Whether `hour` is not booked yet.
    ///
    /// Any integer is accepted; hours outside 0..=23 can never be booked and
    /// therefore always report free.
    pub fn is_free_at(&self, hour: i32) -> bool {
        !self.booked_hours.contains(&hour)
    }

    /// Reserve a single hour
    ///
    /// # Errors
    ///
    /// Returns `RoomError::TimeslotAlreadyBooked` if the hour is already reserved
    pub fn book_hour(&mut self, hour: i32) -> Result<(), RoomError> {
        if !self.booked_hours.insert(hour) {
            return Err(RoomError::TimeslotAlreadyBooked {
                room_id: self.id.clone(),
                hour,
            });
        }
        Ok(())
    }

    /// Booked hours as an ascending `;`-joined list, empty when there are none.
    ///
    /// This is both the persisted `booked_hours` field and the text shown to users.
    pub fn booked_hours_display(&self) -> String {
        self.booked_hours
            .iter()
            .map(|hour| hour.to_string())
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} | Building: {} | Capacity: {} | Booked: {}",
            self.id,
            self.building,
            self.capacity,
            self.booked_hours_display()
        )
    }
}
