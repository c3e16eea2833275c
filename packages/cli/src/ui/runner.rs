//! Session runner: restore, menu loop, save.

use std::{io::Write, sync::Arc};

use rustyline::DefaultEditor;

use classbook_core::{
    CsvRoomRepository, PersistRegistryUseCase, RestoreRegistryUseCase, Restored, RoomRegistry,
    domain::RoomRepository,
};

use super::{
    console::{Console, Prompt},
    handler::{self, Flow},
    menu::{MenuChoice, write_menu},
};
use crate::{config::Args, error::UiError};

/// Run an interactive session on the terminal with the configured data file.
pub fn run(args: &Args) -> Result<(), UiError> {
    let repository = Arc::new(CsvRoomRepository::new(&args.file));
    let mut editor = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();

    tracing::info!(file = %args.file.display(), "starting session");
    run_session(
        repository,
        &args.file.display().to_string(),
        &mut editor,
        &mut stdout,
    )
}

/// Restore the registry, run the menu until the user leaves, then save once.
///
/// The registry is saved even when the menu stops on an input error; that error
/// is returned after the save.
pub fn run_session(
    repository: Arc<dyn RoomRepository>,
    data_file: &str,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<(), UiError> {
    let mut console = Console::new(prompt, out);

    let Restored {
        mut registry,
        warning,
    } = RestoreRegistryUseCase::new(repository.clone()).execute();

    console.say("Hello! This is a simple room booking program.")?;
    match warning {
        Some(e) => {
            console.say("Warning: could not load CSV file. Starting with empty data.")?;
            console.say(format_args!("Error: {e}"))?;
        }
        None => console.say(format_args!(
            "If a saved file '{data_file}' exists, it was loaded already."
        ))?,
    }

    let menu_result = run_menu(&mut registry, &mut console);

    match PersistRegistryUseCase::new(repository).execute(&registry) {
        Ok(_) => console.say(format_args!("Saved data to {data_file}. Goodbye!"))?,
        Err(e) => {
            console.say(format_args!("Could not save data. Error: {e}"))?;
            if menu_result.is_err() {
                tracing::warn!(error = %e, "save failed after the menu stopped on an error");
            }
            menu_result?;
            return Err(e.into());
        }
    }
    menu_result
}

/// Show the menu and dispatch choices until exit or end of input.
pub fn run_menu(registry: &mut RoomRegistry, console: &mut Console<'_>) -> Result<(), UiError> {
    loop {
        console.write_with(write_menu)?;
        let Some(choice) = console.ask("Choose a number: ")? else {
            return Ok(());
        };

        let flow = match MenuChoice::parse(&choice) {
            Some(MenuChoice::CreateRoom) => handler::create_room(registry, console)?,
            Some(MenuChoice::BookRoom) => handler::book_room(registry, console)?,
            Some(MenuChoice::FindRooms) => handler::find_rooms(registry, console)?,
            Some(MenuChoice::ViewRoom) => handler::view_room(registry, console)?,
            Some(MenuChoice::ListRooms) => handler::list_rooms(registry, console)?,
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                console.say("Please type a number from 1 to 6.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}
