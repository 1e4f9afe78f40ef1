//! Keyboard-driven selection menu shared by every list in the shell.

use super::{Console, ConsoleError, ConsoleResult, Key};

/// Cursor over a fixed number of items, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    len: usize,
    selected: usize,
}

impl MenuState {
    /// Returns `None` for an empty list, which has nothing to select.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, selected: 0 })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn up(&mut self) {
        self.selected = if self.selected == 0 {
            self.len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn down(&mut self) {
        self.selected = if self.selected == self.len - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    /// Apply a key; returns true once the selection is confirmed.
    pub fn handle(&mut self, key: Key) -> bool {
        match key {
            Key::Up => self.up(),
            Key::Down => self.down(),
            Key::Enter => return true,
            Key::Interrupt | Key::Other => {}
        }
        false
    }
}

fn render<C: Console>(
    console: &mut C,
    title: Option<&str>,
    labels: &[String],
    state: &MenuState,
) -> ConsoleResult<()> {
    console.clear()?;
    if let Some(title) = title {
        console.write_line(title)?;
    }
    for (i, label) in labels.iter().enumerate() {
        if i == state.selected() {
            console.write_highlighted(&format!("> {label}"))?;
        } else {
            console.write_line(&format!("  {label}"))?;
        }
    }
    Ok(())
}

/// Show `labels`, let the user move with Up/Down and confirm with Enter.
///
/// Returns the index of the confirmed label.
pub fn select<C: Console>(
    console: &mut C,
    title: Option<&str>,
    labels: &[String],
) -> anyhow::Result<usize> {
    let Some(mut state) = MenuState::new(labels.len()) else {
        anyhow::bail!("Cannot show a selection menu without items");
    };

    loop {
        render(console, title, labels, &state)?;
        let key = console.read_key()?;
        if key == Key::Interrupt {
            return Err(ConsoleError::Interrupted.into());
        }
        if state.handle(key) {
            return Ok(state.selected());
        }
    }
}
