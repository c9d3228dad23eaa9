use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::snake::Direction::{self, *};
use crate::term::Surface;

/// A key press, reduced to what the game cares about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Steer(Direction),
    Pause,
    Quit,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(ev: KeyEvent) -> Self {
        match ev {
            ev if is_ctrl_c(&ev) => Key::Quit,
            KeyEvent { code, modifiers: _ } => match code {
                KeyCode::Char('w') | KeyCode::Up => Key::Steer(Up),
                KeyCode::Char('a') | KeyCode::Left => Key::Steer(Left),
                KeyCode::Char('s') | KeyCode::Down => Key::Steer(Down),
                KeyCode::Char('d') | KeyCode::Right => Key::Steer(Right),
                KeyCode::Char('p') => Key::Pause,
                _ => Key::Other,
            }
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// The direction to travel in after seeing `key`. Anything that is not a
/// steering key, or that would turn the snake back onto itself, leaves
/// `current` as it is.
pub fn poll_direction(key: Option<Key>, current: Direction) -> Direction {
    match key {
        Some(Key::Steer(dir)) if dir != current.opposite() => dir,
        _ => current,
    }
}

pub enum Resume {
    Resumed,
    Quit,
}

/// Blocks until the pause key comes round again.
pub fn wait_for_resume<S: Surface + ?Sized>(surface: &mut S) -> anyhow::Result<Resume> {
    debug!("paused");
    loop {
        match surface.read_key()? {
            Key::Pause => {
                debug!("resumed");
                return Ok(Resume::Resumed);
            }
            Key::Quit => return Ok(Resume::Quit),
            _ => {}
        }
    }
}
