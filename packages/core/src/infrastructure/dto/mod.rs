//! Data transfer objects for persisted state.

pub mod csv_row;

pub use csv_row::{CSV_HEADERS, RoomRecord, RoomRow};
