//! Main menu entries.

use std::io::Write;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateRoom,
    BookRoom,
    FindRooms,
    ViewRoom,
    ListRooms,
    Exit,
}

impl MenuChoice {
    /// All entries in display order; entry `i` is chosen by typing `i + 1`.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CreateRoom,
        MenuChoice::BookRoom,
        MenuChoice::FindRooms,
        MenuChoice::ViewRoom,
        MenuChoice::ListRooms,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "1" => Some(Self::CreateRoom),
            "2" => Some(Self::BookRoom),
            "3" => Some(Self::FindRooms),
            "4" => Some(Self::ViewRoom),
            "5" => Some(Self::ListRooms),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateRoom => "Create a new room",
            Self::BookRoom => "Book a room for one hour",
            Self::FindRooms => "Find / filter rooms",
            Self::ViewRoom => "View room bookings",
            Self::ListRooms => "List all rooms",
            Self::Exit => "Exit and save",
        }
    }
}

/// Print the menu
pub fn write_menu(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n----- Classroom Booking -----")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.label())?;
    }
    Ok(())
}
