//! Query filter for `RoomRegistry::find_rooms`.

use super::entity::Room;

/// Conjunction of optional room constraints. An unset field matches every room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Building name, compared case-insensitively for exact equality
    pub building: Option<String>,
    /// Minimum number of seats (inclusive)
    pub min_capacity: Option<u32>,
    /// Hour the room must not be booked at. Not range-checked.
    pub free_at_hour: Option<i32>,
}

impl RoomFilter {
    /// A filter with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    pub fn with_min_capacity(mut self, min_capacity: u32) -> Self {
        self.min_capacity = Some(min_capacity);
        self
    }

    pub fn free_at(mut self, hour: i32) -> Self {
        self.free_at_hour = Some(hour);
        self
    }

    /// Whether `room` satisfies every constraint that is set.
    pub fn matches(&self, room: &Room) -> bool {
        let building_ok = self
            .building
            .as_deref()
            .is_none_or(|building| same_building(room.building(), building));
        let capacity_ok = self
            .min_capacity
            .is_none_or(|min| room.capacity() >= min);
        let free_ok = self.free_at_hour.is_none_or(|hour| room.is_free_at(hour));

        building_ok && capacity_ok && free_ok
    }
}

/// Unicode lowercase mapping, independent of the process locale.
fn same_building(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
