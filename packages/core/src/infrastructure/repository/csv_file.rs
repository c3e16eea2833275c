//! CSV file Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! 1 つの CSV ファイルに全ての Room を保存します。保存は常に上書きです。

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;

use crate::{
    domain::{RepositoryError, Room, RoomRepository},
    infrastructure::dto::{CSV_HEADERS, RoomRecord, RoomRow},
};

/// File name used when no path is configured
pub const DEFAULT_DATA_FILE: &str = "bookings_final_state.csv";

/// Room repository backed by a single CSV file
#[derive(Debug, Clone)]
pub struct CsvRoomRepository {
    path: PathBuf,
}

impl CsvRoomRepository {
    /// Create a repository for the CSV file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Map a csv error to a repository error, keeping the row when csv knows it.
fn read_error(e: csv::Error) -> RepositoryError {
    match e.position() {
        Some(position) => RepositoryError::Malformed {
            row: position.line(),
            reason: e.to_string(),
        },
        None => RepositoryError::Read(e.to_string()),
    }
}

fn write_error(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Write(e.to_string())
}

impl RoomRepository for CsvRoomRepository {
    fn load(&self) -> Result<Vec<Room>, RepositoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted rooms yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepositoryError::Read(e.to_string())),
        };

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
        let headers = reader.headers().map_err(read_error)?.clone();

        let mut rooms = Vec::new();
        for result in reader.records() {
            let record = result.map_err(read_error)?;
            let row = record.position().map_or(0, |position| position.line());
            let room_record: RoomRecord =
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| RepositoryError::Malformed {
                        row,
                        reason: e.to_string(),
                    })?;
            match room_record
                .into_room()
                .map_err(|reason| RepositoryError::Malformed { row, reason })?
            {
                Some(room) => rooms.push(room),
                None => debug!(row, "skipping row without room_no"),
            }
        }

        debug!(path = %self.path.display(), rooms = rooms.len(), "rooms loaded");
        Ok(rooms)
    }

    fn save(&self, rooms: &[Room]) -> Result<(), RepositoryError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(write_error)?;

        writer.write_record(CSV_HEADERS).map_err(write_error)?;
        for room in rooms {
            writer.serialize(RoomRow::from(room)).map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        debug!(path = %self.path.display(), rooms = rooms.len(), "rooms saved");
        Ok(())
    }
}
