//! Interactive menu implementation.

mod console;
mod handler;
mod input;
mod menu;
mod runner;

pub use console::{Console, Prompt};
pub use runner::{run, run_menu, run_session};
