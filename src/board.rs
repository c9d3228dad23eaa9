use crate::consts::*;
use crate::frame::{CellStyle, Frame};
use crate::{Coords, TermInt};

/// The playing field: one glyph per cell, border excluded.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<char>,
}

impl Board {
    pub fn new() -> Self {
        Board { cells: vec![BACKGROUND_CHAR; MAX_SEGMENTS] }
    }

    pub fn reset(&mut self) {
        self.cells.fill(BACKGROUND_CHAR);
    }

    pub fn get(&self, pos: Coords) -> char {
        self.cells[index(pos)]
    }

    pub fn set(&mut self, pos: Coords, ch: char) {
        self.cells[index(pos)] = ch;
    }

    /// Writes `text` horizontally centered on row `y`, returning the cells it
    /// covered. Characters past the right edge are dropped.
    pub fn write_centered(&mut self, y: TermInt, text: &str) -> Vec<Coords> {
        let len = text.chars().count() as TermInt;
        let start = (WIDTH / 2).saturating_sub(len / 2);

        text.chars()
            .zip(start..WIDTH)
            .map(|(ch, x)| {
                self.set((x, y), ch);
                (x, y)
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn index(pos: Coords) -> usize {
    let (x, y) = pos;
    debug_assert!(x < WIDTH && y < HEIGHT, "({}, {}) is off the board", x, y);
    WIDTH as usize * y as usize + x as usize
}

/// Lays the board out inside a one-cell border. Each interior cell shows its
/// board glyph, highlighted as the apple if it is `apple`, otherwise as the
/// snake if it is in `highlight`.
pub fn render(board: &Board, highlight: &[Coords], apple: Option<Coords>) -> Frame {
    let mut frame = Frame::new(WIDTH + 2, HEIGHT + 2);

    for x in 0..WIDTH + 2 {
        frame.put(x, 0, BORDER_CHAR, CellStyle::Border);
        frame.put(x, HEIGHT + 1, BORDER_CHAR, CellStyle::Border);
    }
    for y in 1..HEIGHT + 1 {
        frame.put(0, y, BORDER_CHAR, CellStyle::Border);
        frame.put(WIDTH + 1, y, BORDER_CHAR, CellStyle::Border);
    }

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let pos = (x, y);
            let style = if apple == Some(pos) {
                CellStyle::Apple
            } else if highlight.contains(&pos) {
                CellStyle::Tail
            } else {
                CellStyle::Plain
            };

            frame.put(x + 1, y + 1, board.get(pos), style);
        }
    }

    frame
}
