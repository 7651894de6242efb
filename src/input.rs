use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

/// Commands the terminal front end sends to the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Maps one key event to a command. Key releases and unbound keys yield `None`.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Command::Turn(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ' | 'r' | 'R') => Command::Restart,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Waits up to `timeout` for a key press and maps it to a command.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{command_for_key, Command};
    use crate::direction::Direction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(
            command_for_key(press(KeyCode::Up)),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('a'))),
            Some(Command::Turn(Direction::Left))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('D'))),
            Some(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn quit_and_restart_keys() {
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(press(KeyCode::Enter)), Some(Command::Restart));
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;

        assert_eq!(command_for_key(release), None);
    }
}
