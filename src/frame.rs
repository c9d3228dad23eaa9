//! Styled character buffer handed to the presentation surface.

use crate::TermInt;

/// How a cell is highlighted on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Apple,
    Tail,
    Border,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { ch: ' ', style: CellStyle::Plain }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        let len = width as usize * height as usize;
        Frame { width, height, cells: vec![Cell::default(); len] }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    fn idx(&self, x: TermInt, y: TermInt) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: TermInt, y: TermInt) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn put(&mut self, x: TermInt, y: TermInt, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn row(&self, y: TermInt) -> &[Cell] {
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize).unwrap_or(&[])
    }

    /// The characters of row `y`, without styling.
    pub fn row_text(&self, y: TermInt) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
