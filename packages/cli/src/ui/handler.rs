//! Menu action handlers.
//!
//! Each handler asks for its input, calls the registry and prints the outcome.
//! Registry errors are reported and the menu continues; only the end of input
//! stops the session.

use classbook_core::{RegistryError, RoomFilter, RoomId, RoomRegistry, domain::RoomError};

use super::{
    console::Console,
    input::{non_blank, parse_optional_number, parse_whole_number},
};
use crate::error::UiError;

/// What the menu loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Ask for a line or leave the handler when input has ended.
macro_rules! ask_or_exit {
    ($console:expr, $message:expr) => {
        match $console.ask($message)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

pub fn create_room(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
    let room_no = ask_or_exit!(console, "Enter room id (like NAB101): ");
    let building = ask_or_exit!(console, "Enter building name (like NAB): ");
    let capacity = ask_or_exit!(console, "Enter capacity (a number): ");

    let Ok(capacity) = parse_whole_number::<u32>(&capacity) else {
        console.say("Capacity must be a whole number. Try again.")?;
        return Ok(Flow::Continue);
    };
    let Ok(room_id) = RoomId::new(room_no) else {
        console.say("Room id cannot be empty. Try again.")?;
        return Ok(Flow::Continue);
    };

    match registry.add_room(room_id.clone(), building, capacity) {
        Ok(()) => console.say(format_args!("Room added: {room_id}"))?,
        Err(RegistryError::RoomAlreadyExists(_)) => {
            console.say("Oops! That room id is already used. Try a different id.")?
        }
        Err(e) => console.say(format_args!("Something went wrong while adding room: {e}"))?,
    }
    Ok(Flow::Continue)
}

pub fn book_room(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
    let room_no = ask_or_exit!(console, "Enter room id to book: ");
    let hour = ask_or_exit!(console, "Enter hour (0-23): ");

    let Ok(hour) = parse_whole_number::<i32>(&hour) else {
        console.say("Hour must be a number between 0 and 23.")?;
        return Ok(Flow::Continue);
    };

    match registry.book_room(&room_no, hour) {
        Ok(()) => console.say(format_args!("Booked room {room_no} at hour {hour}"))?,
        Err(RegistryError::RoomNotFound(_)) => {
            console.say("The room doesn't exist. Check the room id and try again.")?
        }
        Err(RegistryError::Room(RoomError::TimeslotAlreadyBooked { .. })) => {
            console.say("That hour is already booked for this room. Pick another hour.")?
        }
        Err(e @ RegistryError::InvalidHour(_)) => console.say(format_args!("Bad input: {e}"))?,
        Err(e) => console.say(format_args!("Could not book the room: {e}"))?,
    }
    Ok(Flow::Continue)
}

/// Blank answers skip a filter. The hour is passed through without a range
/// check, so an hour nobody can book matches every room.
pub fn find_rooms(registry: &RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
    console.say("\nType filters. Leave blank to skip a filter.")?;
    let building = ask_or_exit!(console, "Filter by building (exact name): ");
    let min_capacity = ask_or_exit!(console, "Filter by minimum capacity: ");
    let free_hour = ask_or_exit!(console, "Filter by free at hour (0-23): ");

    let Ok(min_capacity) = parse_optional_number::<u32>(&min_capacity) else {
        console.say("Capacity must be a number. Search cancelled.")?;
        return Ok(Flow::Continue);
    };
    let Ok(free_hour) = parse_optional_number::<i32>(&free_hour) else {
        console.say("Hour must be a number. Search cancelled.")?;
        return Ok(Flow::Continue);
    };

    let filter = RoomFilter {
        building: non_blank(&building).map(str::to_string),
        min_capacity,
        free_at_hour: free_hour,
    };

    let found = registry.find_rooms(&filter);
    console.say(format_args!("\nFound {} room(s):", found.len()))?;
    for room in found {
        console.say(room)?;
    }
    Ok(Flow::Continue)
}

pub fn view_room(registry: &RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
    let room_no = ask_or_exit!(console, "Enter room id to view: ");

    let Ok(room) = registry.get_room(&room_no) else {
        console.say("Sorry, that room id does not exist.")?;
        return Ok(Flow::Continue);
    };

    console.say("\nRoom details:")?;
    console.say(format_args!("Room id: {}", room.id()))?;
    console.say(format_args!("Building: {}", room.building()))?;
    console.say(format_args!("Capacity: {}", room.capacity()))?;
    if room.booked_hours().is_empty() {
        console.say("No bookings yet for this room.")?;
    } else {
        let hours: Vec<String> = room.booked_hours().iter().map(i32::to_string).collect();
        console.say(format_args!("Booked hours (sorted): {}", hours.join(", ")))?;
    }
    Ok(Flow::Continue)
}

pub fn list_rooms(registry: &RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
    if registry.is_empty() {
        console.say("No rooms in the system yet.")?;
        return Ok(Flow::Continue);
    }
    console.say("\nAll rooms:")?;
    for room in registry.rooms() {
        console.say(room)?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::console::testing::ScriptedPrompt;

    fn create_test_registry() -> RoomRegistry {
        let mut registry = RoomRegistry::new();
        registry
            .add_room(RoomId::try_from("NAB101").unwrap(), "NAB".to_string(), 30)
            .unwrap();
        registry
            .add_room(RoomId::try_from("SCI200").unwrap(), "Science".to_string(), 120)
            .unwrap();
        registry
    }

    /// Run a handler against scripted answers and return (flow, printed text).
    fn run_handler(
        registry: &mut RoomRegistry,
        answers: &[&str],
        handler: fn(&mut RoomRegistry, &mut Console<'_>) -> Result<Flow, UiError>,
    ) -> (Flow, String) {
        let mut prompt = ScriptedPrompt::new(answers);
        let mut out = Vec::new();
        let flow = {
            let mut console = Console::new(&mut prompt, &mut out);
            handler(registry, &mut console).unwrap()
        };
        (flow, String::from_utf8(out).unwrap())
    }

    fn find(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
        find_rooms(registry, console)
    }

    fn view(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
        view_room(registry, console)
    }

    fn list(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<Flow, UiError> {
        list_rooms(registry, console)
    }

    #[test]
    fn test_create_room_success() {
        // テスト項目: 入力内容で Room が作成される
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let (flow, out) = run_handler(&mut registry, &["NAB101", "NAB", "30"], create_room);

        // then (期待する結果):
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "Room added: NAB101\n");
        assert_eq!(registry.get_room("NAB101").unwrap().capacity(), 30);
    }

    #[test]
    fn test_create_room_duplicate() {
        // テスト項目: 既存の ID で作成すると案内が表示され、件数は変わらない
        // given (前提条件):
        let mut registry = create_test_registry();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["NAB101", "Other", "5"], create_room);

        // then (期待する結果):
        assert_eq!(out, "Oops! That room id is already used. Try a different id.\n");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_create_room_non_numeric_capacity() {
        // テスト項目: 定員が整数でない場合は作成されない
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["NAB101", "NAB", "-3"], create_room);

        // then (期待する結果):
        assert_eq!(out, "Capacity must be a whole number. Try again.\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_room_empty_id() {
        // テスト項目: 空の ID では作成されない
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["  ", "NAB", "3"], create_room);

        // then (期待する結果):
        assert_eq!(out, "Room id cannot be empty. Try again.\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_room_end_of_input() {
        // テスト項目: 入力途中で入力が終了すると Exit が返される
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let (flow, _) = run_handler(&mut registry, &["NAB101"], create_room);

        // then (期待する結果):
        assert_eq!(flow, Flow::Exit);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_book_room_messages() {
        // テスト項目: 予約の成功・二重予約・範囲外・存在しない Room で案内が表示される
        // given (前提条件):
        let mut registry = create_test_registry();

        // when (操作):
        let (_, booked) = run_handler(&mut registry, &["NAB101", "9"], book_room);
        let (_, twice) = run_handler(&mut registry, &["NAB101", "9"], book_room);
        let (_, late) = run_handler(&mut registry, &["NAB101", "24"], book_room);
        let (_, ghost) = run_handler(&mut registry, &["GHOST", "5"], book_room);
        let (_, text) = run_handler(&mut registry, &["NAB101", "nine"], book_room);

        // then (期待する結果):
        assert_eq!(booked, "Booked room NAB101 at hour 9\n");
        assert_eq!(
            twice,
            "That hour is already booked for this room. Pick another hour.\n"
        );
        assert_eq!(late, "Bad input: Hour must be between 0 and 23 (got 24).\n");
        assert_eq!(
            ghost,
            "The room doesn't exist. Check the room id and try again.\n"
        );
        assert_eq!(text, "Hour must be a number between 0 and 23.\n");
        assert_eq!(
            registry.get_room("NAB101").unwrap().booked_hours_display(),
            "9"
        );
    }

    #[test]
    fn test_find_rooms_with_filters() {
        // テスト項目: 空欄の条件は無視され、指定した条件で検索される
        // given (前提条件):
        let mut registry = create_test_registry();
        registry.book_room("NAB101", 9).unwrap();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["", "20", "9"], find);

        // then (期待する結果):
        assert!(out.contains("Found 1 room(s):"));
        assert!(out.contains("Room SCI200 | Building: Science | Capacity: 120 | Booked: \n"));
        assert!(!out.contains("Room NAB101"));
    }

    #[test]
    fn test_find_rooms_building_case_insensitive() {
        // テスト項目: 建物名は大文字小文字を区別せずに検索される
        // given (前提条件):
        let mut registry = create_test_registry();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["science", "", ""], find);

        // then (期待する結果):
        assert!(out.contains("Found 1 room(s):"));
        assert!(out.contains("Room SCI200"));
    }

    #[test]
    fn test_find_rooms_out_of_range_hour_is_not_rejected() {
        // テスト項目: 範囲外の時間での空き検索は拒否されず、全ての Room が空きとして返される
        // given (前提条件):
        let mut registry = create_test_registry();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &["", "", "30"], find);

        // then (期待する結果):
        assert!(out.contains("Found 2 room(s):"));
    }

    #[test]
    fn test_find_rooms_bad_numbers_cancel_search() {
        // テスト項目: 数値でない条件は検索を中止する
        // given (前提条件):
        let mut registry = create_test_registry();

        // when (操作):
        let (_, bad_capacity) = run_handler(&mut registry, &["", "big", ""], find);
        let (_, bad_hour) = run_handler(&mut registry, &["", "", "noon"], find);

        // then (期待する結果):
        assert!(bad_capacity.ends_with("Capacity must be a number. Search cancelled.\n"));
        assert!(bad_hour.ends_with("Hour must be a number. Search cancelled.\n"));
    }

    #[test]
    fn test_view_room() {
        // テスト項目: Room の詳細と予約時間 (昇順) が表示される
        // given (前提条件):
        let mut registry = create_test_registry();
        registry.book_room("NAB101", 14).unwrap();
        registry.book_room("NAB101", 9).unwrap();

        // when (操作):
        let (_, booked) = run_handler(&mut registry, &["NAB101"], view);
        let (_, empty) = run_handler(&mut registry, &["SCI200"], view);
        let (_, ghost) = run_handler(&mut registry, &["GHOST"], view);

        // then (期待する結果):
        assert_eq!(
            booked,
            "\nRoom details:\nRoom id: NAB101\nBuilding: NAB\nCapacity: 30\nBooked hours (sorted): 9, 14\n"
        );
        assert!(empty.ends_with("No bookings yet for this room.\n"));
        assert_eq!(ghost, "Sorry, that room id does not exist.\n");
    }

    #[test]
    fn test_list_rooms() {
        // テスト項目: 全ての Room が登録順に表示される
        // given (前提条件):
        let mut registry = create_test_registry();
        let mut empty_registry = RoomRegistry::new();

        // when (操作):
        let (_, out) = run_handler(&mut registry, &[], list);
        let (_, empty) = run_handler(&mut empty_registry, &[], list);

        // then (期待する結果):
        assert_eq!(
            out,
            "\nAll rooms:\nRoom NAB101 | Building: NAB | Capacity: 30 | Booked: \nRoom SCI200 | Building: Science | Capacity: 120 | Booked: \n"
        );
        assert_eq!(empty, "No rooms in the system yet.\n");
    }
}
