use std::{io::{Stdout, Write, stdout}, thread, time::Duration};

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use tracing::{info, warn};

use crate::frame::{CellStyle, Frame};
use crate::input::Key;

/// Everything the game needs from the terminal.
pub trait Surface {
    fn clear(&mut self) -> Result<()>;

    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// The next pending key, if any. Never waits.
    fn poll_key(&mut self) -> Result<Option<Key>>;

    fn read_key(&mut self) -> Result<Key>;

    fn sleep(&mut self, duration: Duration);
}

/// Owns the terminal for as long as it lives: raw mode, alternate screen and
/// a hidden cursor are set up on creation and undone on drop.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let mut term = TermManager { stdout: stdout(), active: false };
        term.setup()?;
        Ok(term)
    }

    fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        // From here on restore() has something to undo.
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        info!("terminal acquired");
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        info!("terminal released");
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {}", err);
        }
    }
}

impl Surface for TermManager {
    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        let mut current: Option<CellStyle> = None;

        for y in 0..frame.height() {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for cell in frame.row(y) {
                if current != Some(cell.style) {
                    match style_color(cell.style) {
                        Some(color) => queue!(self.stdout, style::SetForegroundColor(color))?,
                        None => queue!(self.stdout, style::ResetColor)?,
                    }
                    current = Some(cell.style);
                }
                queue!(self.stdout, style::Print(cell.ch))?;
            }
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev.into()));
            }
        }
        Ok(None)
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev.into());
            }
        }
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

fn style_color(style: CellStyle) -> Option<Color> {
    match style {
        CellStyle::Plain => None,
        CellStyle::Apple => Some(Color::Red),
        CellStyle::Tail => Some(Color::Yellow),
        CellStyle::Border => Some(Color::Rgb { r: 128, g: 0, b: 128 }),
    }
}
