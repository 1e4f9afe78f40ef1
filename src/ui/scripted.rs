//! Console that replays a fixed script instead of reading the keyboard.
//!
//! Used to drive the shell in tests. Output is captured per screen: every
//! `clear` starts a new one. Highlighted lines are stored with a `*` prefix.

use std::collections::VecDeque;
use std::io;

use super::{Console, ConsoleError, ConsoleResult, Key};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Line(String),
}

impl Input {
    pub fn line(text: &str) -> Self {
        Input::Line(text.to_string())
    }
}

#[derive(Debug)]
pub struct ScriptedConsole {
    inputs: VecDeque<Input>,
    screens: Vec<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(inputs: Vec<Input>) -> Self {
        Self {
            inputs: inputs.into(),
            screens: vec![Vec::new()],
        }
    }

    /// Inputs the shell has not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn last_screen(&self) -> Vec<&str> {
        self.screens
            .last()
            .map(|lines| lines.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every line written, across all screens.
    pub fn transcript(&self) -> Vec<&str> {
        self.screens.iter().flatten().map(String::as_str).collect()
    }

    fn push(&mut self, line: String) {
        if let Some(screen) = self.screens.last_mut() {
            screen.push(line);
        }
    }

    fn unexpected(expected: &str, got: &Input) -> ConsoleError {
        ConsoleError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("script expected {expected}, found {got:?}"),
        ))
    }
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> ConsoleResult<Key> {
        match self.inputs.pop_front() {
            Some(Input::Key(key)) => Ok(key),
            Some(other) => Err(Self::unexpected("a key", &other)),
            None => Err(ConsoleError::InputClosed),
        }
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        match self.inputs.pop_front() {
            Some(Input::Line(text)) => {
                self.push(format!("{prompt}{text}"));
                Ok(text)
            }
            Some(other) => Err(Self::unexpected("a line", &other)),
            None => Err(ConsoleError::InputClosed),
        }
    }

    fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        self.push(text.to_string());
        Ok(())
    }

    fn write_highlighted(&mut self, text: &str) -> ConsoleResult<()> {
        self.push(format!("*{text}"));
        Ok(())
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        self.screens.push(Vec::new());
        Ok(())
    }
}
