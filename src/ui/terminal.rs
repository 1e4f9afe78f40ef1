//! Crossterm-backed console.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};

use super::{Console, ConsoleError, ConsoleResult, Key};

/// Keeps the terminal in raw mode for as long as it lives.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", err);
        }
    }
}

/// Console on the process's stdin/stdout.
///
/// Raw mode is only on while waiting for a key, so line prompts keep the
/// terminal's normal echo and editing.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    /// Fails when stdin is not a terminal, since keys cannot be read raw.
    pub fn check_interactive() -> anyhow::Result<()> {
        if !io::stdin().is_terminal() {
            anyhow::bail!("carbook needs an interactive terminal");
        }
        Ok(())
    }
}

fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        _ => Key::Other,
    };
    Some(key)
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> ConsoleResult<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key_event) = event::read()?
                && let Some(key) = map_key(key_event)
            {
                log::trace!("Key pressed: {:?}", key);
                return Ok(key);
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }

    fn write_highlighted(&mut self, text: &str) -> ConsoleResult<()> {
        crossterm::execute!(
            io::stdout(),
            SetForegroundColor(Color::Green),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        crossterm::execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_map_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(map_key(press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::Down));
        assert_eq!(map_key(press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(map_key(press(KeyCode::Char('x'), KeyModifiers::NONE)), Some(Key::Other));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(map_key(press(KeyCode::Char('c'), KeyModifiers::NONE)), Some(Key::Other));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), None);
    }
}
