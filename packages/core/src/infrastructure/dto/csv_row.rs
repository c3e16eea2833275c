//! CSV row DTOs for the persisted room file.
//!
//! Layout: `room_no,building,capacity,booked_hours`, one row per room,
//! `booked_hours` as ascending hours joined by `;`.

use serde::{Deserialize, Serialize};

use crate::domain::{Room, RoomId};

/// Header row, in column order
pub const CSV_HEADERS: [&str; 4] = ["room_no", "building", "capacity", "booked_hours"];

/// Separator between hours inside the `booked_hours` field
pub const HOUR_SEPARATOR: char = ';';

/// A row as read from disk. Every column is optional so that files with
/// missing columns still load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomRecord {
    #[serde(default)]
    pub room_no: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub booked_hours: Option<String>,
}

impl RoomRecord {
    /// Convert into a domain room.
    ///
    /// Returns `Ok(None)` for rows without a room number, which are skipped.
    pub fn into_room(self) -> Result<Option<Room>, String> {
        let Ok(id) = RoomId::new(self.room_no) else {
            return Ok(None);
        };
        let hours = parse_hours(self.booked_hours.as_deref().unwrap_or_default())?;

        Ok(Some(Room::restore(
            id,
            self.building,
            self.capacity.unwrap_or(0),
            hours,
        )))
    }
}

/// Parse a `;`-joined hour list. Blank items are ignored.
fn parse_hours(field: &str) -> Result<Vec<i32>, String> {
    field
        .split(HOUR_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i32>()
                .map_err(|e| format!("invalid booked hour '{item}': {e}"))
        })
        .collect()
}

/// A row as written to disk
#[derive(Debug, Clone, Serialize)]
pub struct RoomRow<'a> {
    pub room_no: &'a str,
    pub building: &'a str,
    pub capacity: u32,
    pub booked_hours: String,
}

impl<'a> From<&'a Room> for RoomRow<'a> {
    fn from(room: &'a Room) -> Self {
        Self {
            room_no: room.id().as_str(),
            building: room.building(),
            capacity: room.capacity(),
            booked_hours: room.booked_hours_display(),
        }
    }
}
