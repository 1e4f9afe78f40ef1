//! Console user interface.
//!
//! The interactive shell talks to the user only through the [`Console`]
//! trait. [`terminal::TerminalConsole`] implements it on top of crossterm,
//! [`scripted::ScriptedConsole`] replays canned input for tests.

pub mod menu;
pub mod scripted;
pub mod terminal;

use thiserror::Error;

/// Keys the shell reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    /// Ctrl+C; raw mode swallows the signal so it arrives as a key.
    Interrupt,
    Other,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("interrupted by user")]
    Interrupted,

    #[error("input stream closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

pub trait Console {
    /// Block until a single key is pressed.
    fn read_key(&mut self) -> ConsoleResult<Key>;

    /// Print `prompt` on the current line and read a line of text, without
    /// the trailing newline.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String>;

    fn write_line(&mut self, text: &str) -> ConsoleResult<()>;

    /// Like `write_line`, marking the current menu selection.
    fn write_highlighted(&mut self, text: &str) -> ConsoleResult<()>;

    fn clear(&mut self) -> ConsoleResult<()>;

    /// Wait for any key before moving on. Ctrl+C still ends the session.
    fn pause(&mut self) -> ConsoleResult<()> {
        match self.read_key()? {
            Key::Interrupt => Err(ConsoleError::Interrupted),
            _ => Ok(()),
        }
    }
}
